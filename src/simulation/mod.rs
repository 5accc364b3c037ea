/*!
 * Simulation Module
 * One memory list and process queue per session
 */

mod session;

pub use session::{Session, SharedSession};
