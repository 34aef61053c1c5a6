// Rename strategies
//
// A rename function derives a candidate name from a taken base name and the
// number of names sharing that base so far (the base itself counts as 1).

/// Produces the `cnt`-th candidate for `name`. Always called with `cnt >= 2`.
pub type RenameFn = Box<dyn Fn(&str, usize) -> String + Send + Sync>;

/// `thrift`, `thrift1`, `thrift2`, ...
pub fn zero_indexed_rename(name: &str, cnt: usize) -> String {
    format!("{}{}", name, cnt - 1)
}

/// `thrift`, `thrift_2`, `thrift_3`, ...
pub fn underscore_rename(name: &str, cnt: usize) -> String {
    format!("{}_{}", name, cnt)
}
