use crate::catalog::Catalog;
use crate::error::{ConfigError, ExtractError};
use crate::keyword::{KeywordPositions, KeywordSpec, MSGCTXT, MSGID_PLURAL};
use crate::tree::{Block, Call, Directive, Expr, HashPair, Program, Statement};

/// Walks template trees and collects calls to the configured keywords.
///
/// The keyword table is fixed at construction, so one extractor can serve
/// any number of `parse` calls, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    keywords: KeywordSpec,
}

impl Extractor {
    pub fn new(keywords: KeywordSpec) -> Self {
        Self { keywords }
    }

    pub fn from_positions<K>(
        input: impl IntoIterator<Item = (K, KeywordPositions)>,
    ) -> Result<Self, ConfigError>
    where
        K: Into<String>,
    {
        Ok(Self::new(KeywordSpec::from_positions(input)?))
    }

    pub fn keywords(&self) -> &KeywordSpec {
        &self.keywords
    }

    /// Builds a fresh catalog for one template. Any malformed keyword call
    /// fails the whole template.
    pub fn parse(&self, template: &Program) -> Result<Catalog, ExtractError> {
        let mut catalog = Catalog::new();
        self.visit_program(template, &mut catalog)?;
        Ok(catalog)
    }

    fn visit_program(&self, program: &Program, catalog: &mut Catalog) -> Result<(), ExtractError> {
        for statement in &program.body {
            self.visit_statement(statement, catalog)?;
        }
        Ok(())
    }

    fn visit_statement(
        &self,
        statement: &Statement,
        catalog: &mut Catalog,
    ) -> Result<(), ExtractError> {
        match statement {
            Statement::Content(_) | Statement::Comment(_) => Ok(()),
            Statement::Mustache(call) => self.visit_call(call, catalog),
            Statement::Block(block) => self.visit_block(block, catalog),
            Statement::Directive(directive) => self.visit_directive(directive, catalog),
        }
    }

    fn visit_call(&self, call: &Call, catalog: &mut Catalog) -> Result<(), ExtractError> {
        self.extract_call(call, catalog)?;
        self.visit_arguments(&call.params, &call.hash, catalog)
    }

    // Block helpers are never keywords themselves.
    fn visit_block(&self, block: &Block, catalog: &mut Catalog) -> Result<(), ExtractError> {
        self.visit_arguments(&block.call.params, &block.call.hash, catalog)?;
        if let Some(program) = &block.program {
            self.visit_program(program, catalog)?;
        }
        if let Some(inverse) = &block.inverse {
            self.visit_program(inverse, catalog)?;
        }
        Ok(())
    }

    fn visit_directive(
        &self,
        directive: &Directive,
        catalog: &mut Catalog,
    ) -> Result<(), ExtractError> {
        self.visit_arguments(&directive.params, &directive.hash, catalog)?;
        if let Some(program) = &directive.program {
            self.visit_program(program, catalog)?;
        }
        Ok(())
    }

    fn visit_arguments(
        &self,
        params: &[Expr],
        hash: &[HashPair],
        catalog: &mut Catalog,
    ) -> Result<(), ExtractError> {
        for param in params {
            self.visit_expr(param, catalog)?;
        }
        for pair in hash {
            self.visit_expr(&pair.value, catalog)?;
        }
        Ok(())
    }

    fn visit_expr(&self, expr: &Expr, catalog: &mut Catalog) -> Result<(), ExtractError> {
        match expr {
            Expr::SubExpression(call) => self.visit_call(call, catalog),
            Expr::String(_)
            | Expr::Number(_)
            | Expr::Boolean(_)
            | Expr::Null
            | Expr::Undefined
            | Expr::Path(_) => Ok(()),
        }
    }

    fn extract_call(&self, call: &Call, catalog: &mut Catalog) -> Result<(), ExtractError> {
        let Some(roles) = self.keywords.get(&call.path) else {
            return Ok(());
        };
        // `{{gettext}}` without arguments is not a message.
        let Some(msgid) = call.param(roles.msgid()).and_then(Expr::original) else {
            return Ok(());
        };

        let msgctxt = match roles.get(MSGCTXT) {
            Some(index) => Some(literal_argument(
                call,
                index,
                || ExtractError::MissingContext {
                    msgid: msgid.to_string(),
                },
                || ExtractError::ContextNotLiteral {
                    msgid: msgid.to_string(),
                },
            )?),
            None => None,
        };

        let plural = match roles.get(MSGID_PLURAL) {
            Some(index) => Some(literal_argument(
                call,
                index,
                || ExtractError::MissingPlural {
                    msgid: msgid.to_string(),
                },
                || ExtractError::PluralNotLiteral {
                    msgid: msgid.to_string(),
                },
            )?),
            None => None,
        };

        let record = catalog.entry(msgid, msgctxt);
        if let Some(plural) = plural {
            record.merge_plural(plural)?;
        }
        record.line.push(call.line);

        for (role, index) in roles.custom_roles() {
            if let Some(value) = call.param(index).and_then(Expr::as_string_literal) {
                record.extra.insert(role.to_string(), value.to_string());
            }
        }
        Ok(())
    }
}

fn literal_argument<'a>(
    call: &'a Call,
    index: usize,
    missing: impl FnOnce() -> ExtractError,
    not_literal: impl FnOnce() -> ExtractError,
) -> Result<&'a str, ExtractError> {
    call.param(index)
        .ok_or_else(missing)?
        .as_string_literal()
        .ok_or_else(not_literal)
}
