//! `perch place` - one-shot placement calculator

use clap::Args;
use perch_core::{
    compute_placement, DesiredSize, Margin, Orientation, Placement, Rect, Settings, ViewportSize,
};

/// Arguments for `perch place`
#[derive(Args, Debug)]
pub struct PlaceArgs {
    /// Anchor rectangle as x,y,width,height
    #[arg(long, value_parser = parse_rect)]
    pub anchor: Rect,

    /// Viewport as width,height
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: ViewportSize,

    /// Margin as top,right,bottom,left (overrides settings)
    #[arg(long, value_parser = parse_margin)]
    pub margin: Option<Margin>,

    /// Desired panel size as width,height (overrides settings)
    #[arg(long, value_parser = parse_size)]
    pub size: Option<DesiredSize>,

    /// Arrow half-width (overrides settings)
    #[arg(long)]
    pub arrow: Option<f32>,

    /// Item layout axis (overrides settings)
    #[arg(long, value_parser = parse_orientation)]
    pub orientation: Option<Orientation>,

    /// Height reserved by platform chrome
    #[arg(long, default_value_t = 0.0)]
    pub inset: f32,
}

/// Apply overrides on top of the loaded settings and compute the placement
pub fn run(args: &PlaceArgs, settings: &Settings) -> Placement {
    let mut config = settings.placement;
    if let Some(margin) = args.margin {
        config.margin = margin.sanitized();
    }
    if let Some(size) = args.size {
        config.desired_size = size;
    }
    if let Some(arrow) = args.arrow {
        config.arrow_thickness = arrow.max(0.0);
    }
    if let Some(orientation) = args.orientation {
        config.orientation = orientation;
    }

    let viewport = args.viewport.with_chrome_inset(args.inset);
    tracing::debug!(anchor = ?args.anchor, ?viewport, "Computing placement");
    compute_placement(&args.anchor, &viewport, &config)
}

fn parse_numbers<const N: usize>(value: &str) -> Result<[f32; N], String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!(
            "expected {} comma-separated numbers, got {}",
            N,
            parts.len()
        ));
    }
    let mut numbers = [0.0; N];
    for (slot, part) in numbers.iter_mut().zip(parts) {
        *slot = part
            .parse::<f32>()
            .map_err(|e| format!("invalid number '{}': {}", part, e))?;
    }
    Ok(numbers)
}

fn parse_rect(value: &str) -> Result<Rect, String> {
    let [x, y, width, height] = parse_numbers::<4>(value)?;
    Ok(Rect::new(x, y, width, height))
}

fn parse_viewport(value: &str) -> Result<ViewportSize, String> {
    let [width, height] = parse_numbers::<2>(value)?;
    Ok(ViewportSize::new(width, height))
}

fn parse_margin(value: &str) -> Result<Margin, String> {
    let [top, right, bottom, left] = parse_numbers::<4>(value)?;
    Ok(Margin::new(top, right, bottom, left))
}

fn parse_size(value: &str) -> Result<DesiredSize, String> {
    let [width, height] = parse_numbers::<2>(value)?;
    Ok(DesiredSize::new(width, height))
}

fn parse_orientation(value: &str) -> Result<Orientation, String> {
    match value.to_ascii_lowercase().as_str() {
        "horizontal" => Ok(Orientation::Horizontal),
        "vertical" => Ok(Orientation::Vertical),
        other => Err(format!(
            "unknown orientation '{}', expected horizontal or vertical",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_core::ArrowDirection;

    #[test]
    fn test_parse_rect() {
        assert_eq!(
            parse_rect("40, 500,100,20").unwrap(),
            Rect::new(40.0, 500.0, 100.0, 20.0)
        );
        assert!(parse_rect("1,2,3").is_err());
        assert!(parse_rect("1,2,three,4").is_err());
    }

    #[test]
    fn test_parse_orientation() {
        assert_eq!(parse_orientation("Vertical").unwrap(), Orientation::Vertical);
        assert!(parse_orientation("diagonal").is_err());
    }

    #[test]
    fn test_run_applies_overrides() {
        let args = PlaceArgs {
            anchor: Rect::new(40.0, 500.0, 100.0, 20.0),
            viewport: ViewportSize::new(320.0, 588.0),
            margin: Some(Margin::default()),
            size: Some(DesiredSize::new(100.0, 30.0)),
            arrow: Some(6.0),
            orientation: None,
            inset: 20.0,
        };
        let placement = run(&args, &Settings::default());

        assert_eq!(placement.arrow_direction, ArrowDirection::Up);
        assert_eq!(placement.popover_top, 532.0);
        assert_eq!(placement.popover_left, 40.0);
        assert_eq!(placement.arrow_left, 84.0);
    }
}
