//! Move notation: UCCI coordinates, WXF codes and Chinese text.
//!
//! UCCI is position independent. WXF and Chinese name pieces by file and
//! direction from the mover's side, so they are decoded and encoded through
//! [`Position`](crate::board::Position) methods.

mod chinese;
mod fixed;
mod ucci;
mod wxf;

pub use chinese::{chinese_to_wxf, wxf_to_chinese};
pub use ucci::{parse_ucci, to_ucci};
pub use wxf::{file_mirror, WxfCode};
