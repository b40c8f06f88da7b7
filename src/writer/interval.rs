//! Multiple intervals for one property.

use super::element::ElementWriter;
use super::property::PropertyElement;
use crate::output::{SharedOutput, WriterToken};
use crate::util::{Error, Result};

/// Writes a property as an array of interval objects.
///
/// Each call to [`open_interval`](Self::open_interval) yields a fresh writer
/// of the property's kind; it must be closed before the next one is opened.
pub struct IntervalListWriter<W: PropertyElement> {
    template: W,
    output: Option<SharedOutput>,
    token: Option<WriterToken>,
    current: Option<W>,
}

impl<W: PropertyElement> IntervalListWriter<W> {
    pub(crate) fn new(template: W) -> Self {
        Self { template, output: None, token: None, current: None }
    }

    /// Start the next interval.
    pub fn open_interval(&mut self) -> Result<&mut W> {
        if self.current.as_ref().is_some_and(ElementWriter::is_open) {
            return Err(Error::invalid_operation(format!(
                "previous interval of '{}' is still open",
                self.template.property_name()
            )));
        }
        let (output, token) = self.session()?;
        output.borrow_mut().grant_child(token)?;
        let mut element = self.template.clone();
        element.open(&output)?;
        Ok(self.current.insert(element))
    }

    /// The interval most recently opened, if any.
    pub fn current_interval(&mut self) -> Option<&mut W> {
        self.current.as_mut()
    }

    fn session(&self) -> Result<(SharedOutput, WriterToken)> {
        let (Some(output), Some(token)) = (&self.output, self.token) else {
            return Err(Error::invalid_operation(format!(
                "interval list of '{}' is not open",
                self.template.property_name()
            )));
        };
        output.borrow().expect_active(token)?;
        Ok((output.clone(), token))
    }
}

impl<W: PropertyElement> ElementWriter for IntervalListWriter<W> {
    fn open(&mut self, output: &SharedOutput) -> Result<()> {
        if self.is_open() {
            return Err(Error::invalid_operation(format!(
                "interval list of '{}' is already open",
                self.template.property_name()
            )));
        }
        let token = {
            let mut out = output.borrow_mut();
            out.expect_can_open()?;
            out.write_start_sequence()?;
            out.begin_writer()?
        };
        self.output = Some(output.clone());
        self.token = Some(token);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.current.as_ref().is_some_and(ElementWriter::is_open) {
            return Err(Error::invalid_operation(format!(
                "interval of '{}' is still open",
                self.template.property_name()
            )));
        }
        let (output, token) = self.session()?;
        {
            let mut out = output.borrow_mut();
            out.write_end_sequence()?;
            out.end_writer(token)?;
        }
        self.output = None;
        self.token = None;
        self.current = None;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.token.is_some()
    }
}
