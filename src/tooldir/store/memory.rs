use super::CatalogSource;
use crate::error::Result;
use crate::model::Tool;

/// Tools held in memory. Nothing is read from anywhere.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    tools: Vec<Tool>,
}

impl InMemorySource {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }
}

impl CatalogSource for InMemorySource {
    fn load(&self) -> Result<Vec<Tool>> {
        Ok(self.tools.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} tools)", self.tools.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::{Category, Pricing};
    use chrono::NaiveDate;
    use url::Url;

    /// A plain tool with neutral defaults; tests override the fields they
    /// care about.
    pub fn tool(id: &str, name: &str) -> Tool {
        Tool {
            id: id.to_string(),
            name: name.to_string(),
            short_description: String::new(),
            full_description: String::new(),
            category: Category::Text,
            pricing: Pricing::Free,
            rating: 4.0,
            review_count: 0,
            website_url: Url::parse(&format!("https://{id}.example.com/")).unwrap(),
            image_url: Url::parse(&format!("https://img.example.com/{id}.png")).unwrap(),
            tags: Vec::new(),
            launch_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            featured: None,
        }
    }

    /// The two-tool catalog used throughout the query tests:
    /// "Alpha Writer" (Text, Free, 4.5, [writing]) and
    /// "Beta Vision" (Image, Paid, 4.8, [art]).
    pub fn scenario_tools() -> Vec<Tool> {
        let mut a = tool("a", "Alpha Writer");
        a.rating = 4.5;
        a.tags = vec!["writing".into()];

        let mut b = tool("b", "Beta Vision");
        b.category = Category::Image;
        b.pricing = Pricing::Paid;
        b.rating = 4.8;
        b.tags = vec!["art".into()];

        vec![a, b]
    }

    pub struct CatalogFixture {
        tools: Vec<Tool>,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self { tools: Vec::new() }
        }

        pub fn scenario() -> Self {
            Self {
                tools: scenario_tools(),
            }
        }

        pub fn with_tool(mut self, tool: Tool) -> Self {
            self.tools.push(tool);
            self
        }

        pub fn with_rated(mut self, id: &str, name: &str, rating: f64) -> Self {
            let mut t = tool(id, name);
            t.rating = rating;
            self.tools.push(t);
            self
        }

        pub fn with_launched(mut self, id: &str, name: &str, ymd: (i32, u32, u32)) -> Self {
            let mut t = tool(id, name);
            t.launch_date = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap();
            self.tools.push(t);
            self
        }

        pub fn tools(&self) -> &[Tool] {
            &self.tools
        }

        pub fn source(&self) -> InMemorySource {
            InMemorySource::new(self.tools.clone())
        }

        pub fn catalog(&self) -> Catalog {
            Catalog::new(self.tools.clone()).unwrap()
        }
    }
}
