/*!
 * Table Rendering
 * Box-drawn tables returned as strings for the caller to print
 */

use crate::memory::{BlockView, LedgerEntry, MemoryStats};
use crate::paging::Program;
use crate::process::{BatchReport, IntakeReport, Process};
use std::fmt::Write;

/// Memory map: one row per block in address order
pub fn memory_map(blocks: &[BlockView]) -> String {
    let mut out = String::new();
    out.push_str("\nMemory Map:\n");
    out.push_str("╔═══════╦═════════╦════════════════╦════════════╗\n");
    out.push_str("║ Start ║   Size  ║ Block Status   ║ Process ID ║\n");
    out.push_str("╠═══════╬═════════╬════════════════╬════════════╣\n");
    for block in blocks {
        let owner = block.owner.as_ref().map_or("", |code| code.as_str());
        let _ = writeln!(
            out,
            "║ {:<5} ║ {:<7} ║ {:<14} ║ {:<10} ║",
            block.start_address,
            block.size,
            block.status.tag(),
            owner
        );
    }
    out.push_str("╚═══════╩═════════╩════════════════╩════════════╝\n");
    out
}

pub fn memory_stats(stats: &MemoryStats) -> String {
    format!(
        "Used {} / {} ({:.1}%), {} allocated block(s), {} free block(s), largest free {}, fragmentation {:.1}% [{}]\n",
        stats.used_memory,
        stats.total_memory,
        stats.usage_percentage,
        stats.allocated_blocks,
        stats.free_blocks,
        stats.largest_free_block,
        stats.fragmentation * 100.0,
        stats.memory_pressure()
    )
}

/// Process list in queue order
pub fn process_table(processes: &[Process]) -> String {
    let mut out = String::new();
    out.push_str("╔═══════════╦═════════╦═════════╦═══════════╦═══════════╗\n");
    out.push_str("║ Code      ║ Arrival ║ Memory  ║ Execution ║ Status    ║\n");
    out.push_str("╠═══════════╬═════════╬═════════╬═══════════╬═══════════╣\n");
    for process in processes {
        let _ = writeln!(
            out,
            "║ {:<9} ║ {:<7} ║ {:<7} ║ {:<9} ║ {:<9} ║",
            process.code(),
            process.arrival_time(),
            process.memory_required(),
            process.execution_time(),
            process.allocation_status()
        );
    }
    out.push_str("╚═══════════╩═════════╩═════════╩═══════════╩═══════════╝\n");
    out
}

pub fn batch_report(report: &BatchReport) -> String {
    let mut out = String::new();
    for outcome in &report.outcomes {
        let _ = match &outcome.result {
            Ok(address) => writeln!(
                out,
                "Process {} allocated at address {}",
                outcome.code, address
            ),
            Err(e) => writeln!(out, "Error: {}", e),
        };
    }
    let _ = writeln!(
        out,
        "{}: {} placed, {} pending",
        report.policy,
        report.placed().count(),
        report.failed().count()
    );
    out
}

pub fn intake_report(report: &IntakeReport) -> String {
    let mut out = format!("Loaded {} process(es)\n", report.loaded.len());
    for e in &report.rejected {
        let _ = writeln!(out, "Skipped: {}", e);
    }
    out
}

/// Outstanding ledger entries, or a clean bill
pub fn ledger_report(entries: &[&LedgerEntry]) -> String {
    if entries.is_empty() {
        return "No outstanding allocations. All memory has been released.\n".to_string();
    }
    let mut out = String::from("--- Outstanding Allocations ---\nHandle\tLabel\t\tSize\n");
    for entry in entries {
        let _ = writeln!(out, "{}\t{:<10}\t{}", entry.handle, entry.label, entry.size);
    }
    out.push_str("-------------------------------\n");
    out
}

/// Frame occupancy strip: `[P]` used, `[ ]` free
pub fn frame_map(used: &[bool]) -> String {
    let cells: Vec<&str> = used
        .iter()
        .map(|&used| if used { "[P]" } else { "[ ]" })
        .collect();
    format!("Memory Layout:\n{}\n", cells.join(" "))
}

pub fn program_list(programs: &[Program]) -> String {
    let mut out = String::from("Loaded Programs:\n");
    for program in programs {
        let _ = writeln!(
            out,
            "- {} (Size: {} KB, pages {:?})",
            program.name, program.size_kb, program.pages
        );
    }
    out
}
