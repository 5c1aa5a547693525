/// Generate a `-LAYER` command script from a layermake segment catalog.
///
/// ## Usage
///     cargo run --bin generate_layer_script -- path/to/layermake.xml
///
/// Without an argument a built-in sample catalog is used. One layer is made
/// per data-state entry, keeping the first entry of every other slot; the
/// resulting command script goes to stdout, made names and notifications to
/// stderr. Paste the script at the host command line to create the batch.
use anyhow::Context;
use layermake::{NoExistingNames, ScriptEmitter, SegmentCatalog, Session, Slot};

const SAMPLE_CATALOG: &str = "<layermake>\n\
    <dsseg>E\tExisting</dsseg>\n\
    <dsseg>P\tProposed</dsseg>\n\
    <dsseg>D\tDemolished</dsseg>\n\
    <cseg>RDW\tRoadway</cseg>\n\
    <cseg>UTL\tUtilities</cseg>\n\
    <etseg>LN\tLine work</etseg>\n\
    <etseg>TX\tText and labels</etseg>\n\
    <edseg>CURB\tCurb and gutter</edseg>\n\
    <edseg>EDGE\tEdge of pavement</edseg>\n\
    </layermake>\n";

fn main() -> anyhow::Result<()> {
    let catalog = match std::env::args().nth(1) {
        Some(path) => SegmentCatalog::load(&path)
            .with_context(|| format!("loading catalog '{path}'"))?,
        None => SegmentCatalog::from_xml_str(SAMPLE_CATALOG, &Default::default())
            .context("parsing built-in sample catalog")?,
    };

    let mut session = Session::new(catalog);
    let data_states = session.catalog().segments(Slot::DataState).len();
    for index in 0..data_states {
        session.select(Slot::DataState, index)?;
        let name = session.make(&NoExistingNames)?;
        eprintln!("made {name}");
    }

    for notification in session.notifications() {
        eprintln!("{notification}");
    }

    let mut emitter = ScriptEmitter::new();
    session.finish(&mut emitter)?;
    print!("{}", emitter.script());
    Ok(())
}
