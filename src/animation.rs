pub(crate) mod cycle;
