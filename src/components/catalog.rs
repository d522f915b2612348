//! The component types cirrus ships with.
//!
//! ```text
//! component {definition}
//! ├── lambda {readme, handler}
//! │   ├── function
//! │   ├── task      (batch-flavored definition)
//! │   └── feeder    (built-in only)
//! └── workflow {readme, workflow}
//! ```
//!
//! `component` and `lambda` are abstract: they only exist to be extended
//! and are not registered in the catalog.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::file::{FileRule, FileTemplate, InitContext};
use super::kind::ComponentType;
use crate::error::{CirrusError, Result};

const DEFINITION: FileTemplate =
    FileTemplate::new("definition", "definition.yml", FileRule::Exists).with_init(lambda_definition);

const TASK_DEFINITION: FileTemplate =
    FileTemplate::new("definition", "definition.yml", FileRule::Exists).with_init(task_definition);

const WORKFLOW_DEFINITION: FileTemplate =
    FileTemplate::new("definition", "definition.yml", FileRule::Exists)
        .with_init(workflow_definition);

const README: FileTemplate =
    FileTemplate::new("readme", "README.md", FileRule::Exists).with_init(readme);

const HANDLER: FileTemplate =
    FileTemplate::new("handler", "lambda_function.py", FileRule::Exists).with_init(handler);

const STATE_MACHINE: FileTemplate = FileTemplate::new(
    "workflow",
    "workflow.yml",
    FileRule::YamlMapping {
        required_keys: &["StartAt", "States"],
    },
)
.with_init(state_machine);

fn lambda_definition(ctx: &InitContext<'_>) -> String {
    format!(
        "description: \"{name} {kind}\"\n\
         enabled: true\n\
         environment: {{}}\n\
         lambda:\n  \
           handler: lambda_function.lambda_handler\n  \
           memorySize: 128\n  \
           timeout: 60\n",
        name = ctx.name,
        kind = ctx.kind,
    )
}

fn task_definition(ctx: &InitContext<'_>) -> String {
    format!(
        "description: \"{name} task\"\n\
         enabled: true\n\
         environment: {{}}\n\
         lambda:\n  \
           handler: lambda_function.lambda_handler\n  \
           memorySize: 128\n  \
           timeout: 60\n\
         batch:\n  \
           enabled: false\n  \
           resources: {{}}\n",
        name = ctx.name,
    )
}

fn workflow_definition(ctx: &InitContext<'_>) -> String {
    format!(
        "description: \"{name} workflow\"\n\
         enabled: true\n",
        name = ctx.name,
    )
}

fn readme(ctx: &InitContext<'_>) -> String {
    format!(
        "# {name}\n\nDescribe what the {name} {kind} does, its inputs and its outputs.\n",
        name = ctx.name,
        kind = ctx.kind,
    )
}

fn handler(ctx: &InitContext<'_>) -> String {
    format!(
        "import logging\n\
         \n\
         logger = logging.getLogger(\"{name}\")\n\
         \n\
         \n\
         def lambda_handler(payload, context):\n    \
             logger.debug(\"payload: %s\", payload)\n    \
             return payload\n",
        name = ctx.name,
    )
}

fn state_machine(ctx: &InitContext<'_>) -> String {
    format!(
        "Comment: \"{name} workflow\"\n\
         StartAt: publish\n\
         States:\n  \
           publish:\n    \
             Type: Task\n    \
             Resource: publish\n    \
             End: true\n",
        name = ctx.name,
    )
}

/// Every concrete component type, each composed once.
#[derive(Debug, Clone)]
pub struct Catalog {
    types: Vec<Arc<ComponentType>>,
}

impl Catalog {
    /// Compose the built-in types, homing each at `builtins_root/<tag>`.
    pub fn new(builtins_root: &Path) -> Self {
        let home = |tag: &str| -> PathBuf { builtins_root.join(tag) };

        let component = ComponentType::builder("Component", home("component"))
            .file(DEFINITION)
            .describe_from("description")
            .build();

        let lambda = ComponentType::builder("Lambda", home("lambda"))
            .file(README)
            .file(HANDLER)
            .extends(&component)
            .build();

        let function = ComponentType::builder("Function", home("function"))
            .extends(&lambda)
            .build();

        let task = ComponentType::builder("Task", home("task"))
            .file(TASK_DEFINITION)
            .extends(&lambda)
            .build();

        let feeder = ComponentType::builder("Feeder", home("feeder"))
            .extends(&lambda)
            .user_extendable(false)
            .build();

        let workflow = ComponentType::builder("Workflow", home("workflow"))
            .file(WORKFLOW_DEFINITION)
            .file(README)
            .file(STATE_MACHINE)
            .extends(&component)
            .build();

        Self {
            types: [feeder, function, task, workflow]
                .into_iter()
                .map(Arc::new)
                .collect(),
        }
    }

    /// All registered types.
    pub fn types(&self) -> &[Arc<ComponentType>] {
        &self.types
    }

    /// Types users may create components of.
    pub fn extendable(&self) -> impl Iterator<Item = &Arc<ComponentType>> {
        self.types.iter().filter(|t| t.is_user_extendable())
    }

    /// Look up a type by tag.
    pub fn get(&self, tag: &str) -> Option<&Arc<ComponentType>> {
        self.types.iter().find(|t| t.tag() == tag)
    }

    /// Look up a type by tag, failing with an unknown-type error.
    pub fn require(&self, tag: &str) -> Result<&Arc<ComponentType>> {
        self.get(tag).ok_or_else(|| CirrusError::UnknownType {
            name: tag.to_string(),
        })
    }

    /// Look up a type by collection name (e.g. `functions`).
    pub fn by_collection(&self, collection: &str) -> Option<&Arc<ComponentType>> {
        self.types.iter().find(|t| t.collection() == collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn catalog() -> Catalog {
        Catalog::new(Path::new("/opt/cirrus/builtins"))
    }

    fn roles(kind: &ComponentType) -> HashSet<&'static str> {
        kind.roles().collect()
    }

    #[test]
    fn registers_concrete_types() {
        let catalog = catalog();
        let tags: Vec<_> = catalog.types().iter().map(|t| t.tag()).collect();
        assert_eq!(tags, vec!["feeder", "function", "task", "workflow"]);
        assert!(catalog.get("lambda").is_none());
        assert!(catalog.get("component").is_none());
    }

    #[test]
    fn lambda_family_roles() {
        let catalog = catalog();
        for tag in ["feeder", "function", "task"] {
            assert_eq!(
                roles(catalog.get(tag).unwrap()),
                HashSet::from(["definition", "readme", "handler"]),
                "{tag}"
            );
        }
    }

    #[test]
    fn workflow_roles() {
        let catalog = catalog();
        assert_eq!(
            roles(catalog.get("workflow").unwrap()),
            HashSet::from(["definition", "readme", "workflow"])
        );
    }

    #[test]
    fn task_overrides_definition() {
        let catalog = catalog();
        let ctx = InitContext {
            kind: "task",
            name: "copy",
        };
        let task_def = catalog
            .get("task")
            .unwrap()
            .file("definition")
            .unwrap()
            .initial_content(&ctx)
            .unwrap();
        let function_def = catalog
            .get("function")
            .unwrap()
            .file("definition")
            .unwrap()
            .initial_content(&ctx)
            .unwrap();

        assert!(task_def.contains("batch:"));
        assert!(!function_def.contains("batch:"));
    }

    #[test]
    fn feeders_are_built_in_only() {
        let catalog = catalog();
        assert!(!catalog.get("feeder").unwrap().is_user_extendable());
        let extendable: Vec<_> = catalog.extendable().map(|t| t.tag()).collect();
        assert_eq!(extendable, vec!["function", "task", "workflow"]);
    }

    #[test]
    fn core_dirs_follow_builtins_root() {
        let catalog = catalog();
        assert_eq!(
            catalog.get("function").unwrap().core_dir(),
            Path::new("/opt/cirrus/builtins/function/config")
        );
    }

    #[test]
    fn descriptions_come_from_definition() {
        let catalog = catalog();
        for kind in catalog.types() {
            assert_eq!(kind.description_key(), Some("description"), "{}", kind.tag());
        }
    }

    #[test]
    fn lookup_by_collection() {
        let catalog = catalog();
        assert_eq!(catalog.by_collection("workflows").unwrap().tag(), "workflow");
        assert!(catalog.by_collection("workflow").is_none());
    }

    #[test]
    fn require_unknown_type() {
        let err = catalog().require("widget").unwrap_err();
        assert!(matches!(err, CirrusError::UnknownType { .. }));
    }

    #[test]
    fn initial_content_is_valid_yaml() {
        let ctx = InitContext {
            kind: "workflow",
            name: "mirror",
        };
        for content in [
            lambda_definition(&ctx),
            task_definition(&ctx),
            workflow_definition(&ctx),
            state_machine(&ctx),
        ] {
            let value: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
            assert!(value.is_mapping(), "{content}");
        }
    }
}
