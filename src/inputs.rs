//! Companion input file resolution.
//!
//! A test is described by two files sharing a name, `<name>_Para.kzr` and
//! `<name>_Geom.kzr`. Either one can be passed on the command line.

pub const PARAMETER_SUFFIX: &str = "_Para.kzr";
pub const GEOMETRY_SUFFIX: &str = "_Geom.kzr";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    pub test_name: String,
    pub parameter_file: String,
    pub geometry_file: String,
}

impl InputSet {
    /// Derive the test name and both companion paths from one input path.
    ///
    /// A path without a known suffix is used as-is for both files, so the
    /// existence checks later report it.
    pub fn from_input(input: &str) -> Self {
        let stem = input
            .strip_suffix(GEOMETRY_SUFFIX)
            .or_else(|| input.strip_suffix(PARAMETER_SUFFIX));

        match stem {
            Some(name) => Self {
                test_name: name.trim_matches('_').to_string(),
                parameter_file: format!("{name}{PARAMETER_SUFFIX}"),
                geometry_file: format!("{name}{GEOMETRY_SUFFIX}"),
            },
            None => {
                tracing::warn!(
                    input,
                    "input does not end in {GEOMETRY_SUFFIX} or {PARAMETER_SUFFIX}"
                );
                Self {
                    test_name: input.trim_matches('_').to_string(),
                    parameter_file: input.to_string(),
                    geometry_file: input.to_string(),
                }
            }
        }
    }
}
