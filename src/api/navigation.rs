use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, NavigationTarget};
use crate::interaction::{Activation, PointerButton};

/// Host collaborator that opens a location.
pub trait NavigationHost {
    fn open_target(&mut self, path: &str, in_new_context: bool);
}

/// Where a hover preview should be anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewAnchor {
    pub index: usize,
    pub left_px: f64,
}

/// Host collaborator that shows a peek of a target without navigating.
pub trait PreviewHost {
    fn request_preview(&mut self, target: &str, anchor: PreviewAnchor);
}

/// What a dispatched activation resulted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    Opened { path: String, in_new_context: bool },
    Previewed { path: String },
    Ignored,
}

/// Where an activation originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationSource {
    ChartSurface,
    OverlayLabel,
}

/// Opens the target of `point` for a click-like activation.
///
/// Secondary-button activations are left to the host's context menu, and the
/// chart surface only reacts to primary clicks. An auxiliary click on an
/// overlay label always opens a new context.
pub fn dispatch_activation<N: NavigationHost + ?Sized>(
    point: Option<&DataPoint>,
    activation: Activation,
    source: ActivationSource,
    host: &mut N,
) -> DispatchOutcome {
    match (source, activation.button) {
        (_, PointerButton::Secondary) | (ActivationSource::ChartSurface, PointerButton::Auxiliary) => {
            return DispatchOutcome::Ignored;
        }
        _ => {}
    }
    let Some(target) = point.and_then(|point| point.target.as_ref()) else {
        return DispatchOutcome::Ignored;
    };

    open(target, activation.opens_new_context(), host)
}

/// Requests a preview of the target of `point`, if any.
pub fn dispatch_hover<P: PreviewHost + ?Sized>(
    point: Option<&DataPoint>,
    anchor: PreviewAnchor,
    host: &mut P,
) -> DispatchOutcome {
    let Some(target) = point.and_then(|point| point.target.as_ref()) else {
        return DispatchOutcome::Ignored;
    };
    let path = target.path().to_owned();
    debug!(%path, index = anchor.index, "requesting hover preview");
    host.request_preview(&path, anchor);
    DispatchOutcome::Previewed { path }
}

fn open<N: NavigationHost + ?Sized>(
    target: &NavigationTarget,
    in_new_context: bool,
    host: &mut N,
) -> DispatchOutcome {
    let path = target.path().to_owned();
    debug!(%path, in_new_context, "opening navigation target");
    host.open_target(&path, in_new_context);
    DispatchOutcome::Opened {
        path,
        in_new_context,
    }
}
