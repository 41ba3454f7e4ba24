use crate::areas::workspace::Workspace;
use crate::artifacts::command::request::CommandRequest;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

pub struct Repository {
    writer: RefCell<Box<dyn Write>>,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        let workspace = Workspace::try_from(path)?;

        Ok(Repository {
            writer: RefCell::new(writer),
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Dispatch `request` and write its result line to the writer
    pub fn execute(&self, request: &CommandRequest) -> anyhow::Result<()> {
        let output = self.do_command(request)?;

        writeln!(self.writer(), "{}", output)?;
        self.writer().flush()?;

        Ok(())
    }
}
