//! Generic property writer.
//!
//! `PropertyWriter<V>` owns one CZML property member. Between `open` and
//! `close` it accepts exactly one value (literal, samples or reference) plus
//! the scope members `interval` and `delete`.
//!
//! A literal of a simple kind (boolean, number, string, enum token) in its
//! default encoding is written bare (`"height": 10.0`); everything else goes
//! into an object keyed by encoding (`"outlineColor": {"rgba": [...]}`).

use std::marker::PhantomData;

use super::element::ElementWriter;
use super::interval::IntervalListWriter;
use super::scope::{PropertyCore, Role, ScopeState};
use crate::core::{format_iso8601, seconds_since, TimeInterval, Timestamp};
use crate::output::SharedOutput;
use crate::util::{DVec2, DVec3, Error, Result};
use crate::value::{
    Binding, Bounds, CartographicExtent, ClassificationType, Color, ColorEncoding, CzmlValue,
    ExtentEncoding, HeightReference, Interpolatable, IntoReference, InterpolationAlgorithm,
    Reference, ShadowMode, TimeSeries, Uri, UriResolver,
};

/// Shared interface of property writers, simple and composite.
pub trait PropertyElement: ElementWriter + Clone {
    fn core(&self) -> &PropertyCore;

    fn core_mut(&mut self) -> &mut PropertyCore;

    /// Member name of this property.
    fn property_name(&self) -> &'static str {
        self.core().name()
    }

    /// Restrict this scope to `interval`. At most once per scope.
    fn write_interval(&mut self, interval: &TimeInterval) -> Result<()> {
        self.core_mut().write_interval(interval)
    }

    /// Write the `delete` flag, removing client data for this property.
    fn write_delete(&mut self, delete: bool) -> Result<()> {
        self.core_mut().write_delete(delete)
    }

    /// Write values inside an object even when a bare literal would do.
    fn set_force_interval(&mut self, force: bool) {
        self.core_mut().set_force_interval(force)
    }

    /// Write this property as an array of intervals. Must be the first thing
    /// written after `open`; each interval is a fresh writer of this kind.
    fn open_multiple_intervals(&mut self) -> Result<IntervalListWriter<Self>>
    where
        Self: Sized,
    {
        let mut template = self.clone();
        template.core_mut().set_role(Role::IntervalElement);
        let mut list = IntervalListWriter::new(template);
        self.core_mut().begin_interval_list(|output| list.open(output))?;
        Ok(list)
    }
}

/// Writer for one property holding values of kind `V`.
pub struct PropertyWriter<V: CzmlValue> {
    core: PropertyCore,
    value_written: bool,
    _kind: PhantomData<fn() -> V>,
}

pub type BooleanWriter = PropertyWriter<bool>;
pub type DoubleWriter = PropertyWriter<f64>;
pub type IntegerWriter = PropertyWriter<i32>;
pub type StringWriter = PropertyWriter<String>;
pub type UriWriter = PropertyWriter<Uri>;
pub type ColorWriter = PropertyWriter<Color>;
pub type Cartesian2Writer = PropertyWriter<DVec2>;
pub type CartesianWriter = PropertyWriter<DVec3>;
pub type RectangleCoordinatesWriter = PropertyWriter<CartographicExtent>;
pub type DistanceDisplayConditionWriter = PropertyWriter<Bounds>;
pub type HeightReferenceWriter = PropertyWriter<HeightReference>;
pub type ShadowModeWriter = PropertyWriter<ShadowMode>;
pub type ClassificationTypeWriter = PropertyWriter<ClassificationType>;

impl<V: CzmlValue> PropertyWriter<V> {
    /// Writer for the member `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            core: PropertyCore::new(name),
            value_written: false,
            _kind: PhantomData,
        }
    }

    /// Write a value in the default encoding.
    pub fn write(&mut self, value: impl Into<Binding<V>>) -> Result<()> {
        self.write_as(V::Encoding::default(), value)
    }

    /// Write a value in `encoding`.
    pub fn write_as(&mut self, encoding: V::Encoding, value: impl Into<Binding<V>>) -> Result<()> {
        match value.into() {
            Binding::Literal(v) => self.write_value_as(encoding, &v),
            Binding::Samples(series) => self.write_series_as(encoding, &series),
            Binding::Reference(reference) => self.write_reference(reference),
        }
    }

    /// Write a literal in the default encoding.
    pub fn write_value(&mut self, value: &V) -> Result<()> {
        self.write_value_as(V::Encoding::default(), value)
    }

    /// Write a literal in `encoding`.
    pub fn write_value_as(&mut self, encoding: V::Encoding, value: &V) -> Result<()> {
        self.begin_value()?;
        value.validate(encoding)?;
        let bare = V::BARE
            && encoding == V::Encoding::default()
            && !self.core.force_interval()
            && self.core.scope() == ScopeState::Unopened;
        if bare {
            self.core.write_bare(|out| value.write_literal(encoding, out))?;
        } else {
            self.core
                .write_member(V::key(encoding), |out| value.write_literal(encoding, out))?;
        }
        self.value_written = true;
        Ok(())
    }

    /// Write samples; `dates` and `values` are parallel.
    pub fn write_samples(&mut self, dates: &[Timestamp], values: &[V]) -> Result<()> {
        let series = TimeSeries::new(dates.to_vec(), values.to_vec())?;
        self.write_series_as(V::Encoding::default(), &series)
    }

    /// Write `length` samples starting at `start`.
    pub fn write_samples_range(
        &mut self,
        dates: &[Timestamp],
        values: &[V],
        start: usize,
        length: usize,
    ) -> Result<()> {
        let series = TimeSeries::new(dates.to_vec(), values.to_vec())?.slice(start, length)?;
        self.write_series_as(V::Encoding::default(), &series)
    }

    /// Write a sample series in `encoding`.
    ///
    /// Times are ISO 8601 strings or seconds after an `epoch` member,
    /// depending on the document settings.
    pub fn write_series_as(&mut self, encoding: V::Encoding, series: &TimeSeries<V>) -> Result<()> {
        self.begin_value()?;
        for value in series.values() {
            value.validate(encoding)?;
        }
        let epoch = self.sample_epoch(series.first_date())?;
        if let Some(epoch) = epoch {
            let text = format_iso8601(&epoch);
            self.core.write_member("epoch", |out| out.write_value(&text))?;
        }
        self.core.write_member(V::key(encoding), |out| {
            out.write_start_sequence()?;
            for (date, value) in series.iter() {
                match &epoch {
                    Some(epoch) => out.write_value(&seconds_since(epoch, &date))?,
                    None => out.write_value(&format_iso8601(&date))?,
                }
                value.write_components(encoding, out)?;
            }
            out.write_end_sequence()
        })?;
        self.value_written = true;
        Ok(())
    }

    /// Write a reference to another object's property.
    pub fn write_reference(&mut self, reference: impl IntoReference) -> Result<()> {
        self.begin_value()?;
        let reference: Reference = reference.into_reference()?;
        let text = reference.to_string();
        self.core.write_member("reference", |out| out.write_value(&text))?;
        self.value_written = true;
        Ok(())
    }

    fn begin_value(&self) -> Result<()> {
        if !self.core.is_open() {
            return Err(Error::invalid_operation(format!(
                "property '{}' is not open",
                self.core.name()
            )));
        }
        if self.value_written {
            return Err(Error::invalid_operation(format!(
                "property '{}' already has a value; close it first",
                self.core.name()
            )));
        }
        Ok(())
    }

    fn sample_epoch(&self, first: Option<Timestamp>) -> Result<Option<Timestamp>> {
        let Some(first) = first else {
            return Ok(None);
        };
        let output = self.open_output()?;
        let epoch = output.borrow().settings().sample_epoch(first);
        Ok(epoch)
    }

    fn open_output(&self) -> Result<SharedOutput> {
        self.core.output().cloned().ok_or_else(|| {
            Error::invalid_operation(format!("property '{}' is not open", self.core.name()))
        })
    }
}

impl<V: Interpolatable> PropertyWriter<V> {
    /// Interpolation algorithm for sampled values.
    pub fn write_interpolation_algorithm(&mut self, algorithm: InterpolationAlgorithm) -> Result<()> {
        self.core
            .write_member("interpolationAlgorithm", |out| out.write_value(algorithm.as_str()))
    }

    /// Degree of the interpolating polynomial; must be at least 1.
    pub fn write_interpolation_degree(&mut self, degree: u32) -> Result<()> {
        if degree == 0 {
            return Err(Error::invalid_argument("interpolation degree must be at least 1"));
        }
        self.core.write_member("interpolationDegree", |out| out.write_value(&degree))
    }
}

impl PropertyWriter<Color> {
    /// Write a colour as integer channels.
    pub fn write_rgba(&mut self, color: impl Into<Binding<Color>>) -> Result<()> {
        self.write_as(ColorEncoding::Rgba, color)
    }

    /// Write a colour as float channels.
    pub fn write_rgbaf(&mut self, color: impl Into<Binding<Color>>) -> Result<()> {
        self.write_as(ColorEncoding::Rgbaf, color)
    }
}

impl PropertyWriter<CartographicExtent> {
    /// Write an extent in radians.
    pub fn write_wsen(&mut self, extent: impl Into<Binding<CartographicExtent>>) -> Result<()> {
        self.write_as(ExtentEncoding::Wsen, extent)
    }

    /// Write an extent in degrees.
    pub fn write_wsen_degrees(&mut self, extent: impl Into<Binding<CartographicExtent>>) -> Result<()> {
        self.write_as(ExtentEncoding::WsenDegrees, extent)
    }
}

impl PropertyWriter<Uri> {
    /// Write a URI after passing it through `resolver`.
    pub fn write_uri_with(&mut self, uri: &Uri, resolver: &dyn UriResolver) -> Result<()> {
        self.write_value(&uri.resolve(resolver))
    }
}

impl<V: CzmlValue> Clone for PropertyWriter<V> {
    /// A fresh, unopened writer for the same member.
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            value_written: false,
            _kind: PhantomData,
        }
    }
}

impl<V: CzmlValue> std::fmt::Debug for PropertyWriter<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyWriter")
            .field("name", &self.core.name())
            .field("kind", &V::KIND)
            .field("open", &self.core.is_open())
            .field("value_written", &self.value_written)
            .finish()
    }
}

impl<V: CzmlValue> ElementWriter for PropertyWriter<V> {
    fn open(&mut self, output: &SharedOutput) -> Result<()> {
        self.core.open(output)?;
        self.value_written = false;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.core.close()
    }

    fn is_open(&self) -> bool {
        self.core.is_open()
    }
}

impl<V: CzmlValue> PropertyElement for PropertyWriter<V> {
    fn core(&self) -> &PropertyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PropertyCore {
        &mut self.core
    }
}
