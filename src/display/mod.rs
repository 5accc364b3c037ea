/*!
 * Display Module
 * Terminal rendering of memory maps, process lists and reports
 */

mod table;

pub use table::{
    batch_report, frame_map, intake_report, ledger_report, memory_map, memory_stats,
    process_table, program_list,
};
