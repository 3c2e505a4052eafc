use crate::domain::ports::Console;
use crate::utils::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServletKind {
    Login,
    Logout,
    Dashboard,
}

impl ServletKind {
    pub const ALL: [ServletKind; 3] = [
        ServletKind::Login,
        ServletKind::Logout,
        ServletKind::Dashboard,
    ];

    /// Only variants with their own `service` step can be built.
    pub fn is_concrete(self) -> bool {
        matches!(self, ServletKind::Login)
    }
}

impl fmt::Display for ServletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServletKind::Login => "login",
            ServletKind::Logout => "logout",
            ServletKind::Dashboard => "dashboard",
        };
        f.write_str(name)
    }
}

/// Lifecycle contract. `init` and `config` are no-ops unless overridden.
pub trait Servlet {
    fn kind(&self) -> ServletKind;

    fn init(&mut self) {}

    fn config(&mut self) {}

    fn service(&mut self) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct LoginServlet {
    served: usize,
}

impl LoginServlet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn served(&self) -> usize {
        self.served
    }
}

impl Servlet for LoginServlet {
    fn kind(&self) -> ServletKind {
        ServletKind::Login
    }

    fn service(&mut self) -> Result<()> {
        self.served += 1;
        Ok(())
    }
}

pub fn servlet_for(kind: ServletKind) -> Result<Box<dyn Servlet>> {
    if !kind.is_concrete() {
        return Err(DemoError::AbstractServlet {
            kind: kind.to_string(),
        });
    }
    Ok(Box::new(LoginServlet::new()))
}

pub fn run_lifecycle(servlet: &mut dyn Servlet) -> Result<()> {
    let kind = servlet.kind();
    tracing::debug!("🔧 {} servlet: init", kind);
    servlet.init();
    tracing::debug!("🔧 {} servlet: config", kind);
    servlet.config();
    tracing::debug!("🔧 {} servlet: service", kind);
    servlet.service()
}

pub fn run<C: Console>(console: &mut C) -> Result<()> {
    console.write_line("hello")?;

    for kind in ServletKind::ALL {
        match servlet_for(kind) {
            Ok(mut servlet) => run_lifecycle(servlet.as_mut())?,
            Err(e) => tracing::debug!("Skipping {}: {}", kind, e),
        }
    }

    Ok(())
}
