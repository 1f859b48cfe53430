pub(crate) mod checker;
