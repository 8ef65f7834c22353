//! `#[derive(Validatable)]` implementation
//!
//! Split the same way the input flows: `parse` turns `#[rule(...)]`
//! attributes into a plain struct, `generate` turns that struct into the
//! trait impls.

mod generate;
mod parse;

pub(crate) use generate::derive;
