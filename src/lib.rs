pub mod fon2;
pub mod fontdir;
pub mod render;
