pub mod diagnostics;
pub mod scanner;
