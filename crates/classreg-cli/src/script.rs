//! Command scripts
//!
//! A script is one registry command per line. Lines are tokenized with
//! chumsky (bare words and double-quoted strings) and the tokens are parsed
//! as a clap subcommand, so every script command has the same flag syntax
//! as a regular CLI invocation.

use anyhow::{anyhow, Result};
use chumsky::prelude::*;
use clap::{Parser as ClapParser, Subcommand};
use tracing::{debug, info};

use classreg::prelude::*;

/// One parsed script line
#[derive(ClapParser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
struct ScriptLine {
    #[command(subcommand)]
    command: ScriptCommand,
}

/// Flags shared by attribute commands
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct AttributeArgs {
    /// Attribute type
    #[arg(long = "type", default_value = "", allow_hyphen_values = true)]
    pub attr_type: String,

    #[arg(long, default_value_t = Visibility::Public)]
    pub visibility: Visibility,

    #[arg(long = "static")]
    pub is_static: bool,

    /// Default value
    #[arg(long = "default", allow_hyphen_values = true)]
    pub default_value: Option<String>,
}

impl AttributeArgs {
    fn into_attribute(self, name: String) -> Attribute {
        let attribute = Attribute::new(name, self.attr_type)
            .with_visibility(self.visibility)
            .with_static(self.is_static);
        match self.default_value {
            Some(value) => attribute.with_default(value),
            None => attribute,
        }
    }
}

/// Flags shared by method commands
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct MethodArgs {
    /// Return type
    #[arg(long = "returns", default_value = "void", allow_hyphen_values = true)]
    pub return_type: String,

    #[arg(long, default_value_t = Visibility::Public)]
    pub visibility: Visibility,

    #[arg(long = "static")]
    pub is_static: bool,

    #[arg(long = "abstract")]
    pub is_abstract: bool,

    /// Parameter as name:Type, repeatable
    #[arg(long = "param")]
    pub parameters: Vec<Parameter>,
}

impl MethodArgs {
    fn into_method(self, name: String) -> Method {
        Method::new(name, self.return_type)
            .with_visibility(self.visibility)
            .with_static(self.is_static)
            .with_abstract(self.is_abstract)
            .with_parameters(self.parameters)
    }
}

/// Flags shared by relationship commands
///
/// `--kind` takes any label; names other than the usual UML kinds are kept
/// as written.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct RelationshipArgs {
    #[arg(long, default_value_t = RelationshipKind::Association)]
    pub kind: RelationshipKind,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub multiplicity: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub navigability: String,
}

/// Registry commands available in scripts
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Add a class
    AddClass {
        name: String,
        #[arg(long, default_value_t = Visibility::Public)]
        visibility: Visibility,
        #[arg(long = "abstract")]
        is_abstract: bool,
    },
    /// Delete every class with the name
    DeleteClass { name: String },
    /// Rename the first class with the name
    RenameClass { name: String, new_name: String },
    /// Set the visibility of a class
    SetVisibility { class: String, visibility: Visibility },
    /// Set or clear the abstract flag of a class
    SetAbstract {
        class: String,
        #[arg(action = clap::ArgAction::Set)]
        is_abstract: bool,
    },
    /// Add an attribute to a class
    AddAttribute {
        class: String,
        name: String,
        #[command(flatten)]
        args: AttributeArgs,
    },
    /// Overwrite every attribute with the old name
    EditAttribute {
        class: String,
        old_name: String,
        new_name: String,
        #[command(flatten)]
        args: AttributeArgs,
    },
    /// Delete every attribute with the name
    DeleteAttribute { class: String, name: String },
    /// Add a method to a class
    AddMethod {
        class: String,
        name: String,
        #[command(flatten)]
        args: MethodArgs,
    },
    /// Overwrite every method with the old name
    EditMethod {
        class: String,
        old_name: String,
        new_name: String,
        #[command(flatten)]
        args: MethodArgs,
    },
    /// Delete every method with the name
    DeleteMethod { class: String, name: String },
    /// Link two classes
    AddRelationship {
        source: String,
        target: String,
        #[command(flatten)]
        args: RelationshipArgs,
    },
    /// Overwrite every link between two classes
    EditRelationship {
        source: String,
        target: String,
        #[command(flatten)]
        args: RelationshipArgs,
    },
    /// Remove every link between two classes
    DeleteRelationship { source: String, target: String },
    /// Print a class
    Show { name: String },
}

impl ScriptCommand {
    /// Script keywords with a short description, in declaration order
    pub fn catalog() -> Vec<(String, String)> {
        use clap::CommandFactory;

        ScriptLine::command()
            .get_subcommands()
            .map(|sub| {
                let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
                (sub.get_name().to_string(), about)
            })
            .collect()
    }
}

/// A command together with the 1-based line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub line: usize,
    pub command: ScriptCommand,
}

/// Split one line into tokens
///
/// Tokens are separated by spaces or tabs. A double-quoted token may contain
/// whitespace, and `\` escapes the next character inside quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    token_parser()
        .parse(line)
        .into_result()
        .map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow!("{}", messages.join("; "))
        })
}

fn token_parser<'src>() -> impl Parser<'src, &'src str, Vec<String>, extra::Err<Rich<'src, char>>>
{
    let blank = one_of(" \t");

    let escaped = just('\\').ignore_then(any());
    let quoted = just('"')
        .ignore_then(none_of("\\\"").or(escaped).repeated().collect::<String>())
        .then_ignore(just('"'));
    let bare = none_of(" \t\"").repeated().at_least(1).collect::<String>();

    blank
        .clone()
        .repeated()
        .ignore_then(
            quoted
                .or(bare)
                .separated_by(blank.repeated().at_least(1))
                .allow_trailing()
                .collect::<Vec<_>>(),
        )
        .then_ignore(end())
}

/// Parse a whole script, failing on the first bad line
pub fn parse_script(content: &str) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens = tokenize(raw).map_err(|e| anyhow!("line {}: {}", line, e))?;
        let parsed = ScriptLine::try_parse_from(tokens)
            .map_err(|e| anyhow!("line {}: {}", line, e.render().to_string().trim_end()))?;
        statements.push(Statement {
            line,
            command: parsed.command,
        });
    }

    debug!(statements = statements.len(), "Parsed script");
    Ok(statements)
}

/// A registry plus the text produced by `show` commands
#[derive(Debug, Default)]
pub struct Session {
    registry: ClassRegistry,
    output: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Lines printed by `show` so far
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn run(&mut self, statements: Vec<Statement>) {
        let count = statements.len();
        for statement in statements {
            debug!(line = statement.line, command = ?statement.command, "Executing");
            self.execute(statement.command);
        }
        info!(
            statements = count,
            classes = self.registry.class_count(),
            "Script executed"
        );
    }

    /// Apply one command; commands naming a missing class do nothing
    pub fn execute(&mut self, command: ScriptCommand) {
        match command {
            ScriptCommand::AddClass {
                name,
                visibility,
                is_abstract,
            } => {
                self.registry
                    .add_class(ClassEntity::new(name, visibility, is_abstract));
            }
            ScriptCommand::DeleteClass { name } => self.registry.delete_class(&name),
            ScriptCommand::RenameClass { name, new_name } => {
                self.with_class(&name, |c| c.set_class_name(new_name))
            }
            ScriptCommand::SetVisibility { class, visibility } => {
                self.with_class(&class, |c| c.set_visibility(visibility))
            }
            ScriptCommand::SetAbstract { class, is_abstract } => {
                self.with_class(&class, |c| c.set_abstract_status(is_abstract))
            }
            ScriptCommand::AddAttribute { class, name, args } => {
                self.with_class(&class, |c| c.add_attribute(args.into_attribute(name)))
            }
            ScriptCommand::EditAttribute {
                class,
                old_name,
                new_name,
                args,
            } => self.with_class(&class, |c| {
                c.edit_attribute(&old_name, args.into_attribute(new_name))
            }),
            ScriptCommand::DeleteAttribute { class, name } => {
                self.with_class(&class, |c| c.delete_attribute(&name))
            }
            ScriptCommand::AddMethod { class, name, args } => {
                self.with_class(&class, |c| c.add_method(args.into_method(name)))
            }
            ScriptCommand::EditMethod {
                class,
                old_name,
                new_name,
                args,
            } => self.with_class(&class, |c| {
                c.edit_method(&old_name, args.into_method(new_name))
            }),
            ScriptCommand::DeleteMethod { class, name } => {
                self.with_class(&class, |c| c.delete_method(&name))
            }
            ScriptCommand::AddRelationship {
                source,
                target,
                args,
            } => self.registry.add_relationship(
                &source,
                &target,
                args.kind,
                &args.multiplicity,
                &args.navigability,
            ),
            ScriptCommand::EditRelationship {
                source,
                target,
                args,
            } => self.registry.edit_relationship(
                &source,
                &target,
                args.kind,
                &args.multiplicity,
                &args.navigability,
            ),
            ScriptCommand::DeleteRelationship { source, target } => {
                self.registry.delete_relationship(&source, &target)
            }
            ScriptCommand::Show { name } => {
                let text = match self.registry.find_class_id(&name) {
                    Some(id) => crate::report::describe_class(&self.registry, id),
                    None => format!("{}: not found", name),
                };
                self.output.push(text);
            }
        }
    }

    fn with_class(&mut self, name: &str, apply: impl FnOnce(&mut ClassEntity)) {
        match self.registry.find_class_by_name_mut(name) {
            Some(class) => apply(class),
            None => debug!(class = name, "No class with that name, command skipped"),
        }
    }
}
