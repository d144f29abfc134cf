pub(crate) mod header;
pub(crate) mod outlet;
pub(crate) mod sidebar;
