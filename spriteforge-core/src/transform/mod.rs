//! Frame transforms shared by the sheet builder.

pub mod affine;
