/*!
 * Allocation Policies
 * First-Fit and Best-Fit placement over the memory list
 */

mod best_fit;
mod first_fit;

pub use best_fit::BestFit;
pub use first_fit::FirstFit;

use super::list::MemoryList;
use super::traits::PlacementPolicy;
use super::types::BlockId;
use crate::core::config::ConfigError;
use crate::core::types::Size;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configurable placement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationPolicy {
    FirstFit,
    BestFit,
}

impl AllocationPolicy {
    pub const ALL: [AllocationPolicy; 2] = [AllocationPolicy::FirstFit, AllocationPolicy::BestFit];
}

impl PlacementPolicy for AllocationPolicy {
    fn name(&self) -> &'static str {
        match self {
            AllocationPolicy::FirstFit => FirstFit.name(),
            AllocationPolicy::BestFit => BestFit.name(),
        }
    }

    fn select(&self, memory: &MemoryList, required: Size) -> Option<BlockId> {
        match self {
            AllocationPolicy::FirstFit => FirstFit.select(memory, required),
            AllocationPolicy::BestFit => BestFit.select(memory, required),
        }
    }
}

impl std::fmt::Display for AllocationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AllocationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-fit" | "first_fit" | "firstfit" | "ff" => Ok(AllocationPolicy::FirstFit),
            "best-fit" | "best_fit" | "bestfit" | "bf" => Ok(AllocationPolicy::BestFit),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::types::{BlockView, MemoryError};
    use crate::process::{Process, ProcessCode};
    use pretty_assertions::assert_eq;

    fn code(code: &str) -> ProcessCode {
        ProcessCode::new(code).unwrap()
    }

    /// Free holes of the given sizes, each followed by a one-unit allocated wall
    fn with_holes(holes: &[usize]) -> MemoryList {
        let total: usize = holes.iter().sum::<usize>() + holes.len();
        let mut memory = MemoryList::new(total);
        for (i, hole) in holes.iter().enumerate() {
            let mut filler = Process::new(&format!("H{}", i), 0, *hole, 0).unwrap();
            let mut wall = Process::new(&format!("W{}", i), 0, 1, 0).unwrap();
            FirstFit.place(&mut memory, &mut filler).unwrap();
            FirstFit.place(&mut memory, &mut wall).unwrap();
        }
        for i in 0..holes.len() {
            memory.release(&code(&format!("H{}", i))).unwrap();
        }
        memory
    }

    #[test]
    fn test_best_fit_tie_goes_to_lowest_address() {
        let memory = with_holes(&[40, 30, 40, 30]);
        let id = BestFit.select(&memory, 25).unwrap();
        assert_eq!(memory.block(id).unwrap().start_address(), 41);
    }

    #[test]
    fn test_first_fit_picks_lowest_adequate() {
        let memory = with_holes(&[10, 50, 60]);
        let id = FirstFit.select(&memory, 20).unwrap();
        assert_eq!(memory.block(id).unwrap().start_address(), 11);
    }

    #[test]
    fn test_place_marks_process_once() {
        let mut memory = MemoryList::new(100);
        let mut process = Process::new("P1", 0, 10, 1).unwrap();

        assert_eq!(AllocationPolicy::BestFit.place(&mut memory, &mut process), Ok(0));
        assert!(process.is_allocated());
        assert_eq!(
            AllocationPolicy::BestFit.place(&mut memory, &mut process),
            Err(MemoryError::AlreadyAllocated(code("P1")))
        );
        assert_eq!(
            memory.render(),
            vec![BlockView::allocated(0, 10, code("P1")), BlockView::free(10, 90)]
        );
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("first-fit".parse::<AllocationPolicy>().unwrap(), AllocationPolicy::FirstFit);
        assert_eq!("BF".parse::<AllocationPolicy>().unwrap(), AllocationPolicy::BestFit);
        assert!("worst-fit".parse::<AllocationPolicy>().is_err());
        assert_eq!(AllocationPolicy::BestFit.to_string(), "Best-Fit");
    }
}
