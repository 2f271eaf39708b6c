use log::debug;
use thiserror::Error;

use crate::parser::{FunctionDeclaration, ReturnStatement, Stmt};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SemanticError {
    #[error("the program must define `main`, found `{name}`")]
    NotMain { name: String },
}

/// Guards the one program shape the backend knows how to lower: a function
/// named `main` whose single statement returns an integer constant.
pub struct SemanticVisitor;

impl SemanticVisitor {
    pub fn new() -> Self {
        Self
    }

    pub fn visit_func_def(&mut self, func_def: &FunctionDeclaration) -> Result<(), SemanticError> {
        if func_def.name != "main" {
            return Err(SemanticError::NotMain {
                name: func_def.name.clone(),
            });
        }

        self.visit_stmt(&func_def.body);
        Ok(())
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Return(ReturnStatement { value }) => debug!("main returns {}", value),
        }
    }
}

impl Default for SemanticVisitor {
    fn default() -> Self {
        Self::new()
    }
}

pub fn check(ast: &FunctionDeclaration) -> Result<(), SemanticError> {
    SemanticVisitor::new().visit_func_def(ast)
}
