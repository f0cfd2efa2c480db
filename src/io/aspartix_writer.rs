use super::ResponseWriter;
use crate::aa::{AAFramework, Argument, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format and for the answers to the problems.
///
/// Extensions are written as bracketed lists, e.g. `[a,c]`, and families as lists of extensions, e.g. `[[a],[a,c]]`.
///
/// # Example
///
/// The following example writes an AF to the standard output using the Aspartix format.
///
/// ```
/// # use exaf::aa::{AAFramework, ArgumentSet, LabelType};
/// # use exaf::io::AspartixWriter;
/// # use anyhow::Result;
/// fn write_af_to_stdout<T: LabelType>(af: &AAFramework<T>) -> Result<()> {
///     let writer = AspartixWriter::default();
///     writer.write_framework(&af, &mut std::io::stdout())
/// }
/// # write_af_to_stdout(&AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a"])));
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    ///
    /// Only declared arguments get an `arg` line; undeclared ones appear in their attacks.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a framework";
        for arg in framework.argument_set().iter() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked())
                .context(context)?;
        }
        writer.flush().context(context)
    }
}

fn write_bracketed<T, I, F>(writer: &mut dyn Write, items: I, mut write_item: F) -> Result<()>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&mut dyn Write, T) -> Result<()>,
{
    write!(writer, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write_item(writer, item)?;
    }
    write!(writer, "]")?;
    Ok(())
}

fn write_extension<T: LabelType>(writer: &mut dyn Write, extension: &[&Argument<T>]) -> Result<()> {
    write_bracketed(writer, extension.iter(), |w, arg| {
        write!(w, "{}", arg)?;
        Ok(())
    })
}

impl ResponseWriter<String> for AspartixWriter {
    fn write_extensions(
        &self,
        writer: &mut dyn Write,
        extensions: &[Vec<&Argument<String>>],
    ) -> Result<()> {
        if extensions.is_empty() {
            return super::specs::write_no_extension(writer);
        }
        let context = "while writing a family of extensions";
        write_bracketed(writer, extensions.iter(), |w, ext| write_extension(w, ext.as_slice()))
            .context(context)?;
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }

    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<String>],
    ) -> Result<()> {
        let context = "while writing an extension";
        write_extension(writer, extension).context(context)?;
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)
    }
}
