use crate::domain::areas::workspace::Workspace;
use crate::domain::objects::mistake::LookupPolicy;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Everything a comparison run needs: where documents live, how line
/// lookups are treated and where the report goes.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    policy: LookupPolicy,
}

impl Session {
    pub fn new(
        path: &Path,
        policy: LookupPolicy,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Invalid root directory {:?}", path))?;

        Ok(Session {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
            policy,
        })
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn policy(&self) -> LookupPolicy {
        self.policy
    }
}
