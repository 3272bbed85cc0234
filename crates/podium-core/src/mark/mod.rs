//! Mark parsing and comparison
//!
//! A mark is the textual result of one performance: a clock time
//! (`7.24`, `6:34.9`), a distance (`19' 9.5"`, `5-10`), or an invalidity
//! token (`DNF`, `FOUL`). Marks are only comparable within one event, so a
//! time is never ranked against a distance in practice.

mod compare;
mod format;
mod parse;


pub use compare::{compare_marks, compare_parsed, is_better, is_better_parsed, marks_equal};
pub use format::{format_distance, format_improvement, format_time};
pub use parse::{parse_mark, MarkKind, ParsedMark};
