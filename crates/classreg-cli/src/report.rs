//! Registry summaries for the terminal
//!
//! Text output lists each class with its members in UML notation. JSON
//! output carries the same information in a serde-serializable shape.

use serde::Serialize;

use classreg::prelude::*;

const REMOVED_TARGET: &str = "<removed>";

/// Text block for one class
pub fn describe_class(registry: &ClassRegistry, id: ClassId) -> String {
    let Some(class) = registry.get(id) else {
        return String::new();
    };

    let mut lines = Vec::new();
    let header = format!("{}class {}", class.visibility.to_char(), class.name);
    if class.is_abstract {
        lines.push(format!("<<abstract>> {}", header));
    } else {
        lines.push(header);
    }

    for attribute in &class.attributes {
        lines.push(format!("  {}", attribute));
    }
    for method in &class.methods {
        lines.push(format!("  {}", method));
    }
    for edge in &class.relationships {
        lines.push(format!("  {}", describe_edge(registry, edge)));
    }

    lines.join("\n")
}

fn describe_edge(registry: &ClassRegistry, edge: &RelationshipEdge) -> String {
    let target = target_name(registry, edge);
    let mut details = Vec::new();
    if !edge.multiplicity.is_empty() {
        details.push(edge.multiplicity.as_str());
    }
    if !edge.navigability.is_empty() {
        details.push(edge.navigability.as_str());
    }

    if details.is_empty() {
        format!("--{}--> {}", edge.kind, target)
    } else {
        format!("--{}--> {} [{}]", edge.kind, target, details.join(", "))
    }
}

fn target_name<'a>(registry: &'a ClassRegistry, edge: &RelationshipEdge) -> &'a str {
    registry
        .resolve_target(edge)
        .map(|c| c.name.as_str())
        .unwrap_or(REMOVED_TARGET)
}

/// Text summary of the whole registry
pub fn text_summary(registry: &ClassRegistry) -> String {
    let mut blocks: Vec<String> = registry
        .ids()
        .map(|id| describe_class(registry, id))
        .collect();

    let dangling = registry.dangling_relationships().len();
    let mut footer = format!(
        "{} classes, {} relationships",
        registry.class_count(),
        registry.relationship_count()
    );
    if dangling > 0 {
        footer.push_str(&format!(" ({} dangling)", dangling));
    }
    blocks.push(footer);

    blocks.join("\n\n")
}

#[derive(Debug, Serialize)]
pub struct RegistryReport {
    pub classes: Vec<ClassReport>,
    pub class_count: usize,
    pub relationship_count: usize,
    pub dangling_count: usize,
    /// Class blocks printed by `show` commands, in script order
    pub shown: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassReport {
    pub id: usize,
    pub name: String,
    pub visibility: String,
    pub is_abstract: bool,
    pub attributes: Vec<AttributeReport>,
    pub methods: Vec<MethodReport>,
    pub relationships: Vec<RelationshipReport>,
}

#[derive(Debug, Serialize)]
pub struct AttributeReport {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: String,
    pub visibility: String,
    pub is_static: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MethodReport {
    pub name: String,
    pub return_type: String,
    pub visibility: String,
    pub is_static: bool,
    pub is_abstract: bool,
    pub parameters: Vec<ParameterReport>,
}

#[derive(Debug, Serialize)]
pub struct ParameterReport {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

#[derive(Debug, Serialize)]
pub struct RelationshipReport {
    pub kind: String,
    pub target_id: usize,
    /// `None` when the target class was deleted
    pub target: Option<String>,
    pub multiplicity: String,
    pub navigability: String,
}

impl RegistryReport {
    pub fn from_registry(registry: &ClassRegistry) -> Self {
        let classes = registry
            .entries()
            .map(|(id, class)| ClassReport::new(registry, id, class))
            .collect();

        Self {
            classes,
            class_count: registry.class_count(),
            relationship_count: registry.relationship_count(),
            dangling_count: registry.dangling_relationships().len(),
            shown: Vec::new(),
        }
    }

    pub fn with_shown(mut self, shown: Vec<String>) -> Self {
        self.shown = shown;
        self
    }
}

impl ClassReport {
    fn new(registry: &ClassRegistry, id: ClassId, class: &ClassEntity) -> Self {
        Self {
            id: id.index(),
            name: class.name.clone(),
            visibility: class.visibility.to_string(),
            is_abstract: class.is_abstract,
            attributes: class
                .attributes
                .iter()
                .map(|a| AttributeReport {
                    name: a.name.clone(),
                    attr_type: a.attr_type.clone(),
                    visibility: a.visibility.to_string(),
                    is_static: a.is_static,
                    default_value: a.default_value.clone(),
                })
                .collect(),
            methods: class
                .methods
                .iter()
                .map(|m| MethodReport {
                    name: m.name.clone(),
                    return_type: m.return_type.clone(),
                    visibility: m.visibility.to_string(),
                    is_static: m.is_static,
                    is_abstract: m.is_abstract,
                    parameters: m
                        .parameters
                        .iter()
                        .map(|p| ParameterReport {
                            name: p.name.clone(),
                            param_type: p.param_type.clone(),
                        })
                        .collect(),
                })
                .collect(),
            relationships: class
                .relationships
                .iter()
                .map(|r| RelationshipReport {
                    kind: r.kind.to_string(),
                    target_id: r.target.index(),
                    target: registry.resolve_target(r).map(|c| c.name.clone()),
                    multiplicity: r.multiplicity.clone(),
                    navigability: r.navigability.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoo() -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        registry.add_class(ClassEntity::new("Animal", Visibility::Public, true));
        let dog = registry.add_class(ClassEntity::new("Dog", Visibility::Public, false));
        let class = registry.get_mut(dog).unwrap();
        class.add_attribute(
            Attribute::new("name", "String")
                .with_visibility(Visibility::Private)
                .with_default("\"Rex\""),
        );
        class.add_method(Method::new("bark", "void"));
        registry.add_relationship(
            "Dog",
            "Animal",
            RelationshipKind::Inheritance,
            "1",
            "unidirectional",
        );
        registry
    }

    #[test]
    fn test_describe_class() {
        let registry = zoo();
        let dog = registry.find_class_id("Dog").unwrap();
        let text = describe_class(&registry, dog);
        assert_eq!(
            text,
            "+class Dog\n  -name: String = \"Rex\"\n  +bark(): void\n  --inheritance--> Animal [1, unidirectional]"
        );

        let animal = registry.find_class_id("Animal").unwrap();
        assert_eq!(describe_class(&registry, animal), "<<abstract>> +class Animal");
    }

    #[test]
    fn test_dangling_target_is_marked() {
        let mut registry = zoo();
        registry.delete_class("Animal");
        let summary = text_summary(&registry);
        assert!(summary.contains("--inheritance--> <removed>"));
        assert!(summary.ends_with("1 classes, 1 relationships (1 dangling)"));
    }

    #[test]
    fn test_edge_without_details() {
        let mut registry = zoo();
        registry.add_class(ClassEntity::new("Bone", Visibility::Package, false));
        registry.add_relationship("Dog", "Bone", RelationshipKind::Dependency, "", "");
        let dog = registry.find_class_id("Dog").unwrap();
        assert!(describe_class(&registry, dog).ends_with("--dependency--> Bone"));
    }

    #[test]
    fn test_json_report() {
        let mut registry = zoo();
        registry.delete_class("Animal");
        let report = RegistryReport::from_registry(&registry);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["class_count"], 1);
        assert_eq!(value["dangling_count"], 1);
        let dog = &value["classes"][0];
        assert_eq!(dog["name"], "Dog");
        assert_eq!(dog["attributes"][0]["type"], "String");
        assert_eq!(dog["relationships"][0]["kind"], "inheritance");
        assert!(dog["relationships"][0]["target"].is_null());
        assert!(dog["methods"][0]["parameters"].as_array().unwrap().is_empty());
        assert!(value["shown"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_report_carries_shown_blocks() {
        let registry = zoo();
        let dog = registry.find_class_id("Dog").unwrap();
        let report = RegistryReport::from_registry(&registry)
            .with_shown(vec![describe_class(&registry, dog)]);
        let value = serde_json::to_value(&report).unwrap();

        let shown = value["shown"].as_array().unwrap();
        assert_eq!(shown.len(), 1);
        assert!(shown[0].as_str().unwrap().starts_with("+class Dog\n"));
    }

    #[test]
    fn test_custom_kind_in_reports() {
        let mut registry = zoo();
        registry.add_class(ClassEntity::new("Leash", Visibility::Public, false));
        registry.add_relationship(
            "Dog",
            "Leash",
            RelationshipKind::Other("uses".to_string()),
            "",
            "",
        );
        let dog = registry.find_class_id("Dog").unwrap();
        assert!(describe_class(&registry, dog).ends_with("--uses--> Leash"));

        let value = serde_json::to_value(RegistryReport::from_registry(&registry)).unwrap();
        assert_eq!(value["classes"][1]["relationships"][1]["kind"], "uses");
    }
}
