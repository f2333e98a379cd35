use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An application, page or component manifest. Only the fields the resolver
/// reads are modelled; everything else in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default, alias = "subPackages")]
    pub subpackages: Vec<SubPackage>,
    /// Tag to reference, in document order.
    #[serde(default)]
    pub using_components: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPackage {
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub pages: Vec<String>,
}

impl SubPackage {
    pub fn root(&self) -> &str {
        self.root.as_deref().unwrap_or("")
    }
}
