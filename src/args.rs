use clap::Parser;

/// Ranks alternatives against several criteria with the TOPSIS method.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The table to rank, in CSV or spreadsheet format. The first column is the name of
    /// the alternatives, all the other columns are numeric criteria.
    #[clap(value_parser)]
    pub input: String,

    /// (list of comma-separated numbers) One weight per criterion, for example "1,1,2".
    #[clap(value_parser, allow_hyphen_values = true)]
    pub weights: String,

    /// (list of comma-separated '+' or '-') One impact per criterion: '+' when higher values are
    /// better, '-' when lower values are better. For example "+,-,+".
    #[clap(value_parser, allow_hyphen_values = true)]
    pub impacts: String,

    /// (file path) Where to write the result, in CSV format. It contains the input columns followed
    /// by the score and the rank of each alternative.
    #[clap(value_parser)]
    pub output: String,

    /// (csv or excel, optional) The type of the input. If not specified, it is guessed from the
    /// extension of the input file.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (optional) When using a spreadsheet, the name of the worksheet to use. The first worksheet
    /// is used otherwise.
    #[clap(long, value_parser)]
    pub worksheet: Option<String>,

    /// (file path or 'stdout') If specified, a summary of the computation (ideal points,
    /// distances, scores and ranks) will be written in JSON format to the given location.
    #[clap(long, value_parser)]
    pub summary: Option<String>,

    /// (file path) A reference file containing the expected result in CSV format. If provided,
    /// the program will check that the computed result matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
