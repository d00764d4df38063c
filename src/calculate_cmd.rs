//! Calculate command: run one request through the controller.

use std::rc::Rc;

use anyhow::{Result, bail};
use tracing::{debug, info_span};

use pascha_model::{CalculatorModel, Controller, PaschaCalculatorModel};

use crate::cli::CalculateArgs;
use crate::config::PaschaConfig;
use crate::convert;
use crate::view::{Rendered, TerminalView};

/// Run a calculation and print its result.
pub fn run(args: CalculateArgs, config: &PaschaConfig) -> Result<()> {
    let _cmd = info_span!("calculate", year = args.year).entered();

    // 1. Build request and display settings, CLI over config
    let request = convert::build_request(&args, config)?;
    let settings = convert::build_display_settings(&config.display)?;
    debug!(?request, "request built");

    // 2. Wire the view to the model
    let view = Rc::new(TerminalView::new(
        request.year,
        request.target,
        settings,
        args.json,
    ));
    let mut model = PaschaCalculatorModel::new();
    model.add_observer(view.clone());

    // 3. Calculate
    let mut controller = Controller::new(model);
    controller.calculate(&request);

    // 4. Report
    let mut failure = None;
    for rendered in view.take() {
        match rendered {
            Rendered::Output(text) => println!("{text}"),
            Rendered::Error(text) => failure = Some(text),
        }
    }
    match failure {
        // The JSON error document is the output; stderr gets a short reason.
        Some(text) if args.json => {
            println!("{text}");
            bail!("calculation failed");
        }
        Some(message) => bail!(message),
        None => Ok(()),
    }
}
