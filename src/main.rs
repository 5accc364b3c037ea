/*!
 * memsim - Interactive Entry Point
 *
 * Menu-driven shell over one simulation session:
 * - Memory map display
 * - Process entry and descriptor file loading
 * - First-Fit / Best-Fit batch allocation
 * - Process release
 * - Paging table
 */

use anyhow::{Context, Result};
use memsim::core::limits::{PAGE_SIZE_KB, TOTAL_PAGES};
use memsim::{
    display, init_tracing, AllocationPolicy, Process, ProcessCode, Session, SimError,
    SimulationConfig,
};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Line-oriented prompt reader
struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        print!("{}", label);
        io::stdout().flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the answer parses as a number; `None` at end of input
    fn prompt_number<T: std::str::FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!(
                    "Invalid number {:?}. Please enter a non-negative integer.",
                    answer
                ),
            }
        }
    }
}

fn report(err: impl Into<SimError>) {
    eprintln!("{:?}", miette::Report::new(err.into()));
}

fn print_menu() {
    println!("\n╔══════════════════════════════════╗");
    println!("║         Memory Management        ║");
    println!("╠══════════════════════════════════╣");
    println!("║ 1. Display Memory Map            ║");
    println!("║ 2. Add a New Process             ║");
    println!("║ 3. Allocate Memory (First-Fit)   ║");
    println!("║ 4. Allocate Memory (Best-Fit)    ║");
    println!("║ 5. Load Processes From File      ║");
    println!("║ 6. Display Processes             ║");
    println!("║ 7. Release a Process             ║");
    println!("║ 8. Paging                        ║");
    println!("║ 0. Exit                          ║");
    println!("╚══════════════════════════════════╝");
}

fn add_process<R: BufRead>(console: &mut Console<R>, session: &mut Session) -> Result<()> {
    println!("\nEnter Process Details:");
    let Some(code) = console.prompt("Process Code: ")? else {
        return Ok(());
    };
    let Some(arrival) = console.prompt_number("Arrival Time: ")? else {
        return Ok(());
    };
    let Some(memory) = console.prompt_number("Memory Required: ")? else {
        return Ok(());
    };
    let Some(execution) = console.prompt_number("Execution Time: ")? else {
        return Ok(());
    };

    match Process::new(&code, arrival, memory, execution).and_then(|p| session.add_process(p)) {
        Ok(()) => println!("Process {} added successfully!", code),
        Err(e) => report(e),
    }
    Ok(())
}

fn run_batch(session: &mut Session, policy: AllocationPolicy) {
    if session.queue().pending_count() == 0 {
        println!("No pending processes.");
        return;
    }
    let batch = session.run(policy);
    print!("{}", display::batch_report(&batch));
    print!("{}", display::memory_map(&session.render()));
}

fn load_file<R: BufRead>(console: &mut Console<R>, session: &mut Session) -> Result<()> {
    let Some(path) = console.prompt("Descriptor file: ")? else {
        return Ok(());
    };
    match session.load_descriptors(&path) {
        Ok(intake) => print!("{}", display::intake_report(&intake)),
        Err(e) => report(e),
    }
    Ok(())
}

fn release<R: BufRead>(console: &mut Console<R>, session: &mut Session) -> Result<()> {
    let Some(code) = console.prompt("Process Code to release: ")? else {
        return Ok(());
    };
    match code.parse::<ProcessCode>() {
        Ok(code) => match session.release(&code) {
            Ok(size) => println!("Process {} released ({} units freed)", code, size),
            Err(e) => report(e),
        },
        Err(e) => report(e),
    }
    Ok(())
}

fn paging_menu<R: BufRead>(console: &mut Console<R>, session: &mut Session) -> Result<()> {
    println!(
        "\n=== Memory Management by Paging ({} pages x {} KB) ===",
        TOTAL_PAGES, PAGE_SIZE_KB
    );
    loop {
        println!("\n  1. Load a program");
        println!("  2. Display free pages");
        println!("  3. Display loaded programs");
        println!("  4. Display memory state");
        println!("  5. Unload a program");
        println!("  9. Back");
        let Some(choice) = console.prompt("Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(name) = console.prompt("Enter program name: ")? else {
                    return Ok(());
                };
                let Some(size) = console.prompt_number("Enter program size (in KB): ")? else {
                    return Ok(());
                };
                match session.paging_mut().load(&name, size) {
                    Ok(program) => println!("Program {} loaded successfully", program.name),
                    Err(e) => report(e),
                }
            }
            "2" => {
                let frames: Vec<String> = session
                    .paging()
                    .free_frames()
                    .map(|f| f.to_string())
                    .collect();
                println!("Free Pages: {}", frames.join(" "));
            }
            "3" => print!("{}", display::program_list(session.paging().programs())),
            "4" => print!("{}", display::frame_map(&session.paging().frame_map())),
            "5" => {
                let Some(name) = console.prompt("Enter program name to unload: ")? else {
                    return Ok(());
                };
                match session.paging_mut().unload(&name) {
                    Ok(program) => println!("Program {} unloaded successfully", program.name),
                    Err(e) => report(e),
                }
            }
            "9" => return Ok(()),
            _ => println!("Invalid choice! Try again."),
        }
    }
}

fn main() -> Result<()> {
    let config = SimulationConfig::default()
        .with_env()?
        .with_args(std::env::args().skip(1))?;

    init_tracing(config.trace_json);
    info!(total_memory = config.total_memory, policy = %config.policy, "memsim starting");

    let mut session = Session::new(&config);
    if let Some(path) = &config.load {
        match session.load_descriptors(path) {
            Ok(intake) => print!("{}", display::intake_report(&intake)),
            Err(e) => report(e),
        }
    }

    let stdin = io::stdin();
    let mut console = Console { input: stdin.lock() };

    loop {
        print_menu();
        let Some(choice) = console.prompt("Enter your choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                print!("{}", display::memory_map(&session.render()));
                print!("{}", display::memory_stats(&session.stats()));
            }
            "2" => add_process(&mut console, &mut session)?,
            "3" => run_batch(&mut session, AllocationPolicy::FirstFit),
            "4" => run_batch(&mut session, AllocationPolicy::BestFit),
            "5" => load_file(&mut console, &mut session)?,
            "6" => print!("{}", display::process_table(session.queue().as_slice())),
            "7" => release(&mut console, &mut session)?,
            "8" => paging_menu(&mut console, &mut session)?,
            "0" | "exit" | "quit" => break,
            "" => {}
            _ => println!("Invalid choice! Please try again."),
        }
    }

    println!("Exiting program...");
    print!("{}", display::ledger_report(&session.outstanding()));
    let leaked = session.finish();
    info!(outstanding = leaked.len(), "memsim finished");
    Ok(())
}
