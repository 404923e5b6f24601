pub mod bitmap;
pub mod sheet;
pub mod text;
pub mod util;
