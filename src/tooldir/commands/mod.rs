use crate::config::DirectoryConfig;
use crate::model::Tool;
use crate::query::FacetCounts;
use serde::Serialize;

pub mod browse;
pub mod config;
pub mod facets;
pub mod navigate;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of a detail lookup. A miss is an ordinary result.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Box<Tool>),
    NotFound(String),
}

impl Lookup {
    pub fn tool(&self) -> Option<&Tool> {
        match self {
            Lookup::Found(tool) => Some(tool),
            Lookup::NotFound(_) => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_tools: Vec<Tool>,
    pub lookup: Option<Lookup>,
    pub facets: Option<FacetCounts>,
    pub config: Option<DirectoryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_tools(mut self, tools: Vec<Tool>) -> Self {
        self.listed_tools = tools;
        self
    }

    pub fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn with_facets(mut self, facets: FacetCounts) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_config(mut self, config: DirectoryConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
