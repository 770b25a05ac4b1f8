/// The three request shapes OMDb is queried with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OmdbQuery {
    /// Best match for a title, used with a single letter as the seed.
    TitleSeed {
        seed: char,
        year: String,
        plot: String,
    },
    Detail {
        id: String,
        plot: String,
    },
    Search {
        query: String,
    },
}

impl OmdbQuery {
    /// Query parameters for this request, without the API key.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            OmdbQuery::TitleSeed { seed, year, plot } => vec![
                ("t", seed.to_string()),
                ("y", year.clone()),
                ("plot", plot.clone()),
            ],
            OmdbQuery::Detail { id, plot } => vec![("i", id.clone()), ("plot", plot.clone())],
            OmdbQuery::Search { query } => vec![("s", query.clone())],
        }
    }
}
