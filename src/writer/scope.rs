//! Interval scoping for property writers.
//!
//! A property member holds either a bare literal, an object (optionally
//! restricted to an `interval`), or an array of such objects. The scope is
//! decided by the first thing written after `open` and cannot change until
//! `close`.

use crate::core::TimeInterval;
use crate::output::{CzmlOutputStream, SharedOutput, WriterToken};
use crate::util::{Error, Result};

/// What a property member currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeState {
    /// Member name written, nothing else yet.
    Unopened,
    /// A bare literal; nothing more may follow.
    Bare,
    /// An object; `interval` and value members go inside it.
    Object,
    /// An array of interval objects.
    IntervalList,
}

/// Where a property writer sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    /// A named member of its parent object.
    Member,
    /// One object inside an interval list.
    IntervalElement,
}

/// Something children can be opened inside.
pub trait ParentScope {
    /// Make the parent ready to receive a child member and return the shared
    /// output. Fails if the parent is closed or another child is still open.
    fn prepare_child(&mut self) -> Result<SharedOutput>;
}

/// Lifecycle and scope state of one property writer.
#[derive(Debug)]
pub struct PropertyCore {
    name: &'static str,
    role: Role,
    output: Option<SharedOutput>,
    token: Option<WriterToken>,
    scope: ScopeState,
    interval_written: bool,
    force_interval: bool,
}

impl PropertyCore {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            role: Role::Member,
            output: None,
            token: None,
            scope: ScopeState::Unopened,
            interval_written: false,
            force_interval: false,
        }
    }

    /// Member name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.token.is_some()
    }

    #[inline]
    pub fn scope(&self) -> ScopeState {
        self.scope
    }

    #[inline]
    pub fn force_interval(&self) -> bool {
        self.force_interval
    }

    /// Always write values inside an object, never bare.
    pub fn set_force_interval(&mut self, force: bool) {
        self.force_interval = force;
    }

    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Shared output, if open.
    pub fn output(&self) -> Option<&SharedOutput> {
        self.output.as_ref()
    }

    pub(crate) fn open(&mut self, output: &SharedOutput) -> Result<()> {
        if self.is_open() {
            return Err(Error::invalid_operation(format!(
                "property '{}' is already open",
                self.name
            )));
        }
        let token = {
            let mut out = output.borrow_mut();
            out.expect_can_open()?;
            match self.role {
                Role::Member => out.write_property_name(self.name)?,
                Role::IntervalElement => out.write_start_object()?,
            }
            out.begin_writer()?
        };
        self.scope = match self.role {
            Role::Member => ScopeState::Unopened,
            Role::IntervalElement => ScopeState::Object,
        };
        self.interval_written = false;
        self.output = Some(output.clone());
        self.token = Some(token);
        tracing::trace!(property = self.name, "open");
        Ok(())
    }

    pub(crate) fn close(&mut self) -> Result<()> {
        let (output, token) = self.session()?;
        {
            let mut out = output.borrow_mut();
            out.expect_active(token)?;
            match self.scope {
                ScopeState::Unopened => {
                    out.write_start_object()?;
                    out.write_end_object()?;
                }
                ScopeState::Object => out.write_end_object()?,
                ScopeState::Bare | ScopeState::IntervalList => {}
            }
            out.end_writer(token)?;
        }
        self.output = None;
        self.token = None;
        self.scope = ScopeState::Unopened;
        tracing::trace!(property = self.name, "close");
        Ok(())
    }

    /// Run `f` on the output after checking this writer is open and innermost.
    pub(crate) fn with_output<T>(
        &mut self,
        f: impl FnOnce(&mut CzmlOutputStream) -> Result<T>,
    ) -> Result<T> {
        let (output, token) = self.session()?;
        let mut out = output.borrow_mut();
        out.expect_active(token)?;
        f(&mut out)
    }

    /// Start the object scope unless it is already open.
    pub fn open_interval_if_necessary(&mut self) -> Result<()> {
        let scope = self.scope;
        let name = self.name;
        self.with_output(|out| match scope {
            ScopeState::Unopened => out.write_start_object(),
            ScopeState::Object => Ok(()),
            ScopeState::Bare => Err(Error::invalid_operation(format!(
                "property '{name}' was written as a bare value"
            ))),
            ScopeState::IntervalList => Err(Error::invalid_operation(format!(
                "property '{name}' is writing multiple intervals; write through the interval list"
            ))),
        })?;
        self.scope = ScopeState::Object;
        Ok(())
    }

    /// Write a bare literal as the member value.
    pub(crate) fn write_bare(
        &mut self,
        f: impl FnOnce(&mut CzmlOutputStream) -> Result<()>,
    ) -> Result<()> {
        if self.scope != ScopeState::Unopened {
            return Err(Error::invalid_operation(format!(
                "property '{}' cannot take a bare value now",
                self.name
            )));
        }
        self.with_output(f)?;
        self.scope = ScopeState::Bare;
        Ok(())
    }

    /// Write a member inside the object scope, opening it if needed.
    pub(crate) fn write_member(
        &mut self,
        key: &str,
        f: impl FnOnce(&mut CzmlOutputStream) -> Result<()>,
    ) -> Result<()> {
        self.open_interval_if_necessary()?;
        self.with_output(|out| {
            out.write_property_name(key)?;
            f(out)
        })
    }

    /// Restrict the values written in this scope to `interval`.
    pub fn write_interval(&mut self, interval: &TimeInterval) -> Result<()> {
        if self.interval_written {
            return Err(Error::invalid_operation(format!(
                "property '{}' already has an interval; use multiple intervals instead",
                self.name
            )));
        }
        let text = interval.to_iso8601();
        self.write_member("interval", |out| out.write_value(&text))?;
        self.interval_written = true;
        Ok(())
    }

    /// Write the `delete` flag.
    pub fn write_delete(&mut self, delete: bool) -> Result<()> {
        self.write_member("delete", |out| out.write_value(&delete))
    }

    /// Turn the member into an array of interval objects; `start` opens the
    /// list writer on the shared output.
    pub(crate) fn begin_interval_list(
        &mut self,
        start: impl FnOnce(&SharedOutput) -> Result<()>,
    ) -> Result<()> {
        let (output, token) = self.session()?;
        output.borrow().expect_active(token)?;
        if self.scope != ScopeState::Unopened {
            return Err(Error::invalid_operation(format!(
                "property '{}' already has content; multiple intervals must come first",
                self.name
            )));
        }
        output.borrow_mut().grant_child(token)?;
        start(&output)?;
        self.scope = ScopeState::IntervalList;
        Ok(())
    }

    fn session(&self) -> Result<(SharedOutput, WriterToken)> {
        match (&self.output, self.token) {
            (Some(output), Some(token)) => Ok((output.clone(), token)),
            _ => Err(Error::invalid_operation(format!(
                "property '{}' is not open",
                self.name
            ))),
        }
    }
}

impl Clone for PropertyCore {
    /// A fresh, unopened core with the same name and configuration.
    fn clone(&self) -> Self {
        Self {
            role: self.role,
            force_interval: self.force_interval,
            ..Self::new(self.name)
        }
    }
}

impl ParentScope for PropertyCore {
    fn prepare_child(&mut self) -> Result<SharedOutput> {
        self.open_interval_if_necessary()?;
        let (output, token) = self.session()?;
        output.borrow_mut().grant_child(token)?;
        Ok(output)
    }
}

/// Lifecycle of a packet: one JSON object in the document array.
#[derive(Debug, Default)]
pub struct PacketCore {
    output: Option<SharedOutput>,
    token: Option<WriterToken>,
}

impl PacketCore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn open(&mut self, output: &SharedOutput) -> Result<()> {
        if self.is_open() {
            return Err(Error::invalid_operation("packet is already open"));
        }
        let token = {
            let mut out = output.borrow_mut();
            out.expect_can_open()?;
            out.write_start_object()?;
            out.begin_writer()?
        };
        self.output = Some(output.clone());
        self.token = Some(token);
        Ok(())
    }

    pub(crate) fn close(&mut self) -> Result<()> {
        let (output, token) = self.session()?;
        {
            let mut out = output.borrow_mut();
            out.expect_active(token)?;
            out.write_end_object()?;
            out.end_writer(token)?;
        }
        self.output = None;
        self.token = None;
        Ok(())
    }

    /// Write a plain member of the packet.
    pub(crate) fn write_member(
        &mut self,
        key: &str,
        f: impl FnOnce(&mut CzmlOutputStream) -> Result<()>,
    ) -> Result<()> {
        let (output, token) = self.session()?;
        let mut out = output.borrow_mut();
        out.expect_active(token)?;
        out.write_property_name(key)?;
        f(&mut out)
    }

    fn session(&self) -> Result<(SharedOutput, WriterToken)> {
        match (&self.output, self.token) {
            (Some(output), Some(token)) => Ok((output.clone(), token)),
            _ => Err(Error::invalid_operation("packet is not open")),
        }
    }
}

impl Clone for PacketCore {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl ParentScope for PacketCore {
    fn prepare_child(&mut self) -> Result<SharedOutput> {
        let (output, token) = self.session()?;
        output.borrow_mut().grant_child(token)?;
        Ok(output)
    }
}
