pub mod align;
pub mod constants;
pub mod diagnostics;
pub mod engine;
pub mod lookup;
pub mod record;
