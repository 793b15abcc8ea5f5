//! Command-line surface: one subcommand per API operation.

use clap::{Parser, Subcommand};
use oa_client::{DebateType, Endpoint, OpenAustraliaApi, OpenAustraliaError, Records};

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Debug, Parser)]
#[command(
    name = "openaustralia",
    version,
    about = "Query the OpenAustralia parliamentary data API",
    long_about = None
)]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Electoral divisions, optionally those covering a postcode.
    Divisions {
        #[arg(long)]
        postcode: Option<String>,
    },
    /// One member of the House of Representatives.
    Representative {
        #[arg(long)]
        person_id: u64,
    },
    /// Members of the House of Representatives.
    Representatives {
        #[arg(long)]
        postcode: Option<String>,
    },
    /// One senator.
    Senator {
        #[arg(long)]
        person_id: u64,
    },
    /// Senators, optionally for one state.
    Senators {
        #[arg(long)]
        state: Option<String>,
    },
    /// Debates in one house.
    Debates {
        /// representatives or senate
        #[arg(long = "type")]
        debate_type: DebateType,
        #[arg(long)]
        search: Option<String>,
    },
    /// Hansard across both houses.
    Hansard {
        #[arg(long)]
        search: Option<String>,
    },
    /// Comments left on the site.
    Comments,
}

impl Command {
    /// The remote operation this subcommand invokes.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Divisions { .. } => Endpoint::Divisions,
            Self::Representative { .. } => Endpoint::Representative,
            Self::Representatives { .. } => Endpoint::Representatives,
            Self::Senator { .. } => Endpoint::Senator,
            Self::Senators { .. } => Endpoint::Senators,
            Self::Debates { .. } => Endpoint::Debates,
            Self::Hansard { .. } => Endpoint::Hansard,
            Self::Comments => Endpoint::Comments,
        }
    }

    /// Invoke the matching operation on `api`.
    ///
    /// # Errors
    /// Propagates the client's error unchanged.
    pub async fn run(&self, api: &dyn OpenAustraliaApi) -> Result<Records, OpenAustraliaError> {
        match self {
            Self::Divisions { postcode } => api.get_divisions(postcode.as_deref()).await,
            Self::Representative { person_id } => api.get_representative(*person_id).await,
            Self::Representatives { postcode } => {
                api.get_representatives(postcode.as_deref()).await
            }
            Self::Senator { person_id } => api.get_senator(*person_id).await,
            Self::Senators { state } => api.get_senators(state.as_deref()).await,
            Self::Debates {
                debate_type,
                search,
            } => api.get_debates(*debate_type, search.as_deref()).await,
            Self::Hansard { search } => api.get_hansard(search.as_deref()).await,
            Self::Comments => api.get_comments().await,
        }
    }
}
