//! Execution context: the current state of one flow execution.
//!
//! The context is computed by the server and cannot be written, so only
//! fetch is offered. Types follow the list / page / context / instance
//! layout shared by every REST resource proxy.

use crate::error::{Error, Result};
use crate::rest::{RestClient, Solution};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// Path solution for an execution context
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExecutionContextSolution {
    flow_sid: String,
    execution_sid: String,
}

impl ExecutionContextSolution {
    /// Solution for the given flow and execution
    pub fn new(flow_sid: impl Into<String>, execution_sid: impl Into<String>) -> Self {
        Self {
            flow_sid: flow_sid.into(),
            execution_sid: execution_sid.into(),
        }
    }

    /// The SID of the Flow
    pub fn flow_sid(&self) -> &str {
        &self.flow_sid
    }

    /// The SID of the Execution
    pub fn execution_sid(&self) -> &str {
        &self.execution_sid
    }
}

impl Solution for ExecutionContextSolution {
    const URI_TEMPLATE: &'static str = "/Flows/{flow_sid}/Executions/{execution_sid}/Context";

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("flow_sid", self.flow_sid.as_str()),
            ("execution_sid", self.execution_sid.as_str()),
        ]
    }
}

/// Factory for [`ExecutionContextContext`] handles
#[derive(Clone, Debug)]
pub struct ExecutionContextList {
    client: RestClient,
}

impl ExecutionContextList {
    /// List bound to a transport
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Construct a context for the solution (no I/O)
    pub fn get(&self, solution: ExecutionContextSolution) -> ExecutionContextContext {
        ExecutionContextContext::new(self.client.clone(), solution)
    }
}

impl fmt::Display for ExecutionContextList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Studio.V1.ExecutionContextList>")
    }
}

/// A raw payload together with the solution it was fetched for
#[derive(Clone, Debug)]
pub struct ExecutionContextPage {
    client: RestClient,
    solution: ExecutionContextSolution,
}

impl ExecutionContextPage {
    /// Page bound to a transport and solution
    pub fn new(client: RestClient, solution: ExecutionContextSolution) -> Self {
        Self { client, solution }
    }

    /// Build an instance from one payload
    pub fn get_instance(&self, payload: &Value) -> ExecutionContextInstance {
        ExecutionContextInstance::from_payload(self.client.clone(), payload, self.solution.clone())
    }
}

impl fmt::Display for ExecutionContextPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<Studio.V1.ExecutionContextPage>")
    }
}

/// Handle capable of fetching one execution context
#[derive(Clone, Debug)]
pub struct ExecutionContextContext {
    client: RestClient,
    solution: ExecutionContextSolution,
    uri: String,
}

impl ExecutionContextContext {
    /// Context for the solution; the URI is fixed here
    pub fn new(client: RestClient, solution: ExecutionContextSolution) -> Self {
        let uri = solution.uri();
        Self {
            client,
            solution,
            uri,
        }
    }

    /// Resource URI relative to the API base
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Solution this context is bound to
    pub fn solution(&self) -> &ExecutionContextSolution {
        &self.solution
    }

    /// Fetch the current execution context
    ///
    /// # Errors
    /// Returns [`crate::Error::Remote`] on a non-success status and
    /// [`crate::Error::MalformedResponse`] when the body is not a JSON object.
    pub async fn fetch(&self) -> Result<ExecutionContextInstance> {
        let payload = self.client.fetch(Method::GET, &self.uri).await?;
        if !payload.is_object() {
            return Err(Error::MalformedResponse(format!(
                "expected a JSON object from {}, got {}",
                self.uri, payload
            )));
        }
        Ok(ExecutionContextInstance::from_payload(
            self.client.clone(),
            &payload,
            self.solution.clone(),
        ))
    }
}

impl fmt::Display for ExecutionContextContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Studio.V1.ExecutionContextContext {}>",
            self.solution.describe()
        )
    }
}

/// Server-returned fields of an execution context
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecutionContextProperties {
    /// The SID of the Account that created the resource
    pub account_sid: Option<String>,
    /// The current state of the flow
    pub context: Option<Value>,
    /// The SID of the Flow
    pub flow_sid: Option<String>,
    /// The SID of the Execution
    pub execution_sid: Option<String>,
    /// The absolute URL of the resource
    pub url: Option<String>,
}

impl ExecutionContextProperties {
    /// Marshal a payload; missing or mistyped fields become `None`
    pub fn from_payload(payload: &Value) -> Self {
        let string = |key: &str| payload.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            account_sid: string("account_sid"),
            context: payload.get("context").filter(|v| !v.is_null()).cloned(),
            flow_sid: string("flow_sid"),
            execution_sid: string("execution_sid"),
            url: string("url"),
        }
    }
}

/// Snapshot of an execution context
#[derive(Debug)]
pub struct ExecutionContextInstance {
    client: RestClient,
    properties: ExecutionContextProperties,
    solution: ExecutionContextSolution,
    proxy: OnceLock<ExecutionContextContext>,
}

impl ExecutionContextInstance {
    /// Build an instance from a fetched payload
    pub fn from_payload(
        client: RestClient,
        payload: &Value,
        solution: ExecutionContextSolution,
    ) -> Self {
        Self {
            client,
            properties: ExecutionContextProperties::from_payload(payload),
            solution,
            proxy: OnceLock::new(),
        }
    }

    /// Context sharing this instance's solution, created on first use
    fn proxy(&self) -> &ExecutionContextContext {
        self.proxy.get_or_init(|| {
            ExecutionContextContext::new(self.client.clone(), self.solution.clone())
        })
    }

    /// All marshaled fields
    pub fn properties(&self) -> &ExecutionContextProperties {
        &self.properties
    }

    /// Solution the instance was fetched for
    pub fn solution(&self) -> &ExecutionContextSolution {
        &self.solution
    }

    /// The SID of the Account that created the resource
    pub fn account_sid(&self) -> Option<&str> {
        self.properties.account_sid.as_deref()
    }

    /// The current state of the flow
    pub fn context(&self) -> Option<&Value> {
        self.properties.context.as_ref()
    }

    /// The SID of the Flow
    pub fn flow_sid(&self) -> Option<&str> {
        self.properties.flow_sid.as_deref()
    }

    /// The SID of the Execution
    pub fn execution_sid(&self) -> Option<&str> {
        self.properties.execution_sid.as_deref()
    }

    /// The absolute URL of the resource
    pub fn url(&self) -> Option<&str> {
        self.properties.url.as_deref()
    }

    /// Re-fetch through the lazily created context
    pub async fn fetch(&self) -> Result<ExecutionContextInstance> {
        self.proxy().fetch().await
    }
}

impl fmt::Display for ExecutionContextInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Studio.V1.ExecutionContextInstance {}>",
            self.solution.describe()
        )
    }
}
