pub mod apply;
pub mod grade;
pub mod init;
pub mod lessons;
pub mod outline;
pub mod preview;

pub use apply::{apply, ApplyArgs};
pub use grade::{grade, GradeArgs};
pub use init::{init, InitArgs};
pub use lessons::{lessons, LessonsArgs};
pub use outline::{outline, OutlineArgs};
pub use preview::{preview, PreviewArgs};
