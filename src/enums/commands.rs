use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all dashboard sections and render the charts
    Overview,
    /// Look up one user's survey responses by DNI
    User {
        dni: String,
    },
}
