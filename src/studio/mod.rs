//! Studio REST API resources.
//!
//! Entry point is [`Studio`], which hands out versioned resource lists:
//!
//! ```no_run
//! use dlproxy::config::StudioConfig;
//! use dlproxy::studio::{ExecutionContextSolution, Studio};
//!
//! # async fn example() -> dlproxy::Result<()> {
//! let studio = Studio::new(&StudioConfig {
//!     account_sid: "ACxxx".into(),
//!     auth_token: "token".into(),
//!     ..Default::default()
//! })?;
//!
//! let context = studio
//!     .v1()
//!     .execution_context()
//!     .get(ExecutionContextSolution::new("FWxxx", "EXxxx"));
//! let snapshot = context.fetch().await?;
//! println!("{:?}", snapshot.context());
//! # Ok(())
//! # }
//! ```

mod execution_context;

pub use execution_context::{
    ExecutionContextContext, ExecutionContextInstance, ExecutionContextList, ExecutionContextPage,
    ExecutionContextProperties, ExecutionContextSolution,
};

use crate::config::StudioConfig;
use crate::error::Result;
use crate::rest::RestClient;

/// Studio API domain
#[derive(Clone, Debug)]
pub struct Studio {
    v1: V1,
}

impl Studio {
    /// Build the domain from configuration
    pub fn new(config: &StudioConfig) -> Result<Self> {
        Ok(Self {
            v1: V1 {
                client: RestClient::new(config)?,
            },
        })
    }

    /// Version 1 of the API
    pub fn v1(&self) -> &V1 {
        &self.v1
    }
}

/// Studio API version 1
#[derive(Clone, Debug)]
pub struct V1 {
    client: RestClient,
}

impl V1 {
    /// Wrap an existing transport
    pub fn from_client(client: RestClient) -> Self {
        Self { client }
    }

    /// Execution context resources
    pub fn execution_context(&self) -> ExecutionContextList {
        ExecutionContextList::new(self.client.clone())
    }
}
