pub(crate) mod common;

mod advance;
mod filtering;
