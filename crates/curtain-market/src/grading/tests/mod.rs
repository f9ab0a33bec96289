mod common;
mod level;
