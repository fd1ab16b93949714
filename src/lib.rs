//! Clip - reflow text into fixed-width terminal lines
//!
//! Wrapping keeps explicit newlines, indents the first line, applies a
//! margin to continuation lines and can justify wrapped lines. Two escape
//! bytes (TAB and CR by default) embedded in the text force a break onto a
//! margin line or an indent line, which lets a help screen align option
//! names and descriptions with a single call.
//!
//! ```
//! use clip::WrapOptions;
//!
//! let opts = WrapOptions::for_width(30).with_indent(5).with_margin(20);
//! let help = opts.wrap("-t, --time\tShow timestamps");
//! assert_eq!(help, "     -t, --time     Show\n                    timestamps");
//! ```

pub mod error;
pub mod justify;
pub mod options;
pub mod output;
pub mod string_utils;
pub mod terminal;
pub mod wrap;

pub use error::{ClipError, ClipResult};
pub use justify::justify;
pub use options::WrapOptions;
pub use output::{OutputConfig, TextFormatter, WrapReport, print_json};
pub use terminal::{ScreenSize, default_wrap_options, screen_size};
pub use wrap::{wrap_default, wrap_with_args};
