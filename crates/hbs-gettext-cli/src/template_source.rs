use handlebars::template::{
    DecoratorTemplate, HelperTemplate, Parameter, Template, TemplateElement,
};
use handlebars::TemplateError;
use hbs_gettext_core::{Block, Call, Directive, DirectiveKind, Expr, HashPair, Program, Statement};
use serde_json::Value as Json;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("template syntax error: {reason}")]
pub struct TemplateSourceError {
    pub reason: String,
}

impl From<TemplateError> for TemplateSourceError {
    fn from(error: TemplateError) -> Self {
        Self {
            reason: error.to_string(),
        }
    }
}

/// Parses Handlebars source into the extractor's tree.
pub fn parse_template(source: &str) -> Result<Program, TemplateSourceError> {
    let template = Template::compile(source)?;
    Ok(lower_template(&template, 1))
}

fn lower_template(template: &Template, fallback_line: usize) -> Program {
    let body = template
        .elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let line = template
                .mapping
                .get(index)
                .map_or(fallback_line, |mapping| mapping.0);
            lower_element(element, line)
        })
        .collect();
    Program::new(body)
}

fn lower_element(element: &TemplateElement, line: usize) -> Statement {
    match element {
        TemplateElement::RawString(text) => Statement::Content(text.clone()),
        TemplateElement::Comment(text) => Statement::Comment(text.clone()),
        TemplateElement::Expression(helper) | TemplateElement::HtmlExpression(helper) => {
            Statement::Mustache(lower_call(helper, line))
        }
        TemplateElement::HelperBlock(helper) => Statement::Block(Block {
            call: lower_call(helper, line),
            program: helper
                .template
                .as_ref()
                .map(|template| lower_template(template, line)),
            inverse: helper
                .inverse
                .as_ref()
                .map(|template| lower_template(template, line)),
        }),
        TemplateElement::DecoratorExpression(decorator)
        | TemplateElement::DecoratorBlock(decorator) => {
            Statement::Directive(lower_directive(decorator, DirectiveKind::Decorator, line))
        }
        TemplateElement::PartialExpression(partial) | TemplateElement::PartialBlock(partial) => {
            Statement::Directive(lower_directive(partial, DirectiveKind::Partial, line))
        }
        // `TemplateElement` is `#[non_exhaustive]`; every current variant is matched above.
        _ => Statement::Content(String::new()),
    }
}

fn lower_call(helper: &HelperTemplate, line: usize) -> Call {
    Call {
        path: parameter_name(&helper.name),
        params: lower_params(&helper.params, line),
        hash: lower_hash(&helper.hash, line),
        line,
    }
}

fn lower_directive(decorator: &DecoratorTemplate, kind: DirectiveKind, line: usize) -> Directive {
    Directive {
        kind,
        name: parameter_name(&decorator.name),
        params: lower_params(&decorator.params, line),
        hash: lower_hash(&decorator.hash, line),
        program: decorator
            .template
            .as_ref()
            .map(|template| lower_template(template, line)),
        line,
    }
}

fn parameter_name(parameter: &Parameter) -> String {
    match parameter {
        Parameter::Literal(Json::String(name)) => name.clone(),
        other => other.as_name().unwrap_or_default().to_string(),
    }
}

fn lower_params(params: &[Parameter], line: usize) -> Vec<Expr> {
    params
        .iter()
        .map(|param| lower_parameter(param, line))
        .collect()
}

// The parser keeps hash pairs in a map; sort them for a stable walk order.
fn lower_hash(hash: &HashMap<String, Parameter>, line: usize) -> Vec<HashPair> {
    let mut pairs: Vec<HashPair> = hash
        .iter()
        .map(|(key, value)| HashPair {
            key: key.clone(),
            value: lower_parameter(value, line),
        })
        .collect();
    pairs.sort_by(|left, right| left.key.cmp(&right.key));
    pairs
}

fn lower_parameter(parameter: &Parameter, line: usize) -> Expr {
    match parameter {
        Parameter::Name(name) => Expr::Path(name.clone()),
        Parameter::Path(_) => Expr::Path(parameter.as_name().unwrap_or_default().to_string()),
        Parameter::Literal(value) => lower_literal(value),
        Parameter::Subexpression(subexpression) => match subexpression.as_element() {
            TemplateElement::Expression(helper) | TemplateElement::HtmlExpression(helper) => {
                Expr::SubExpression(Box::new(lower_call(helper, line)))
            }
            _ => Expr::Undefined,
        },
        // `Parameter` is `#[non_exhaustive]`; every current variant is matched above.
        _ => Expr::Undefined,
    }
}

fn lower_literal(value: &Json) -> Expr {
    match value {
        Json::String(text) => Expr::String(text.clone()),
        Json::Number(number) => Expr::Number(number.to_string()),
        Json::Bool(flag) => Expr::Boolean(*flag),
        Json::Null => Expr::Null,
        Json::Array(_) | Json::Object(_) => Expr::Undefined,
    }
}
