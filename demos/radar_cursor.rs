use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::EnvFilter;

use gpui_polarplot::{
    AxisId, AxisSpan, ChartContext, CircleGeometry, CircularAxisConfig, CircularAxisRenderer,
    Cursor, CursorBehavior, CursorConfig, GpuiPolarView, PolarViewConfig, RadialCursorConfig,
    Radius, Theme,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(640.0), px(640.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let circle = CircleGeometry::default().with_inner_radius(Radius::percent(20.0));
            let angular = AxisId::next();

            let axis = CircularAxisRenderer::new(
                CircularAxisConfig::categories([
                    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                    "Dec",
                ])
                .with_circle(circle)
                .with_ticks(6.0, false),
            );
            let cursor = Cursor::radial(RadialCursorConfig::new(
                CursorConfig::default()
                    .with_behavior(CursorBehavior::ZoomX)
                    .with_x_axis(angular),
                circle,
            ));
            let chart = ChartContext::new().with_x_axis(angular, AxisSpan::default());

            let config = PolarViewConfig {
                theme: Theme::dark(),
                ..Default::default()
            };
            let view = GpuiPolarView::with_config(cursor, config)
                .with_axis(axis)
                .with_chart(chart);
            cx.new(|_| view)
        })
        .unwrap();
    });
}
