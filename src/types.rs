/// Group label text assigned by a binning scheme.
/// Examples: `1st quartile`, `0-500`, `>30000`
pub type GroupLabel = String;
/// Column name in a delimited catalog file.
/// Examples: `members`, `new_popularity_group`
pub type ColumnName = String;
/// Raw cell text preserved verbatim from the input file.
/// Example: `Fullmetal Alchemist: Brotherhood`
pub type CellValue = String;
