#![allow(non_snake_case)]

#[macro_use]
pub mod ring;
#[macro_use]
pub mod computation;
pub mod primitive_int;
pub mod integer;
pub mod divisibility;
pub mod pid;
pub mod field;
pub mod rings;
pub mod algorithms;
