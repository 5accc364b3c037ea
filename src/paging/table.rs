/*!
 * Page Table
 * Fixed pool of frames handed out to whole programs
 */

use super::types::{PagingError, PagingResult, Program};
use crate::core::limits::{PAGE_SIZE_KB, PROGRAM_NAME_MAX_LEN, TOTAL_PAGES};
use crate::core::types::{FrameNumber, Size};
use log::{info, warn};
use std::collections::VecDeque;

/// Pages needed for a program of `size_kb`, rounding up
pub fn pages_needed(size_kb: Size) -> usize {
    size_kb.div_ceil(PAGE_SIZE_KB)
}

/// Page table with a free-frame pool
#[derive(Debug, Clone)]
pub struct PageTable {
    total_pages: usize,
    free: VecDeque<FrameNumber>,
    /// Most recently loaded first
    programs: Vec<Program>,
}

impl PageTable {
    pub fn new() -> Self {
        Self::with_pages(TOTAL_PAGES)
    }

    /// Create a table with frames `1..=total_pages`
    pub fn with_pages(total_pages: usize) -> Self {
        Self {
            total_pages,
            free: (1..=total_pages as FrameNumber).collect(),
            programs: Vec::new(),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Free frames, in the order they will be handed out
    pub fn free_frames(&self) -> impl Iterator<Item = FrameNumber> + '_ {
        self.free.iter().copied()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Load a program, taking frames from the front of the free pool
    pub fn load(&mut self, name: &str, size_kb: Size) -> PagingResult<&Program> {
        if name.is_empty()
            || name.chars().count() > PROGRAM_NAME_MAX_LEN
            || name.chars().any(char::is_whitespace)
        {
            return Err(PagingError::InvalidName(name.to_string()));
        }
        if size_kb == 0 {
            return Err(PagingError::InvalidSize(size_kb));
        }
        if self.programs.iter().any(|p| p.name == name) {
            return Err(PagingError::DuplicateProgram(name.to_string()));
        }

        let needed = pages_needed(size_kb);
        if needed > self.free.len() {
            warn!(
                "Insufficient free pages for program {}: needs {}, {} free",
                name,
                needed,
                self.free.len()
            );
            return Err(PagingError::InsufficientPages {
                name: name.to_string(),
                needed,
                available: self.free.len(),
            });
        }

        let pages: Vec<FrameNumber> = self.free.drain(..needed).collect();
        info!("Program {} loaded into {} page(s): {:?}", name, needed, pages);
        self.programs.insert(
            0,
            Program {
                name: name.to_string(),
                size_kb,
                pages,
            },
        );
        Ok(&self.programs[0])
    }

    /// Unload a program, pushing its frames back onto the front of the pool
    pub fn unload(&mut self, name: &str) -> PagingResult<Program> {
        let index = self
            .programs
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| PagingError::ProgramNotFound(name.to_string()))?;
        let program = self.programs.remove(index);
        for &frame in &program.pages {
            self.free.push_front(frame);
        }
        info!(
            "Program {} unloaded, {} page(s) returned ({} free)",
            name,
            program.pages.len(),
            self.free.len()
        );
        Ok(program)
    }

    /// Occupancy by frame: index `i` describes frame `i + 1`
    pub fn frame_map(&self) -> Vec<bool> {
        let mut used = vec![false; self.total_pages];
        for frame in self.programs.iter().flat_map(|p| p.pages.iter()) {
            if let Some(slot) = used.get_mut(*frame as usize - 1) {
                *slot = true;
            }
        }
        used
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}
