#[cfg(test)]
mod tests {
    use cloudnix_onboard::config::OnboardConfig;
    use cloudnix_onboard::wizard::controller::{REQUIRED_FIELDS_MESSAGE, SELECT_THEME_MESSAGE};
    use cloudnix_onboard::wizard::{
        FieldName, MarkerState, Severity, Shortcut, Step, StepController, StepOutcome,
    };
    use pretty_assertions::assert_eq;
    use std::time::{Duration, Instant};

    fn controller() -> StepController {
        StepController::new(OnboardConfig::default())
    }

    fn fill(controller: &mut StepController, name: FieldName, value: &str) {
        controller.field_input(name, value);
        controller.field_blur(name);
    }

    fn fill_product_step(controller: &mut StepController) {
        controller.cycle_choice(FieldName::ProductType, true);
        controller.cycle_choice(FieldName::ProductCategory, true);
        fill(controller, FieldName::ProductName, "Widget");
    }

    #[test]
    fn test_starts_on_theme_step() {
        let controller = controller();
        assert_eq!(controller.current_step(), Step::Theme);
        assert!(controller.state().selected_theme().is_none());
        assert!(controller.state().form_data().is_empty());
        assert!(!controller.render().advance_enabled);
    }

    #[test]
    fn test_advance_without_theme_is_blocked() {
        let mut controller = controller();
        let now = Instant::now();

        assert_eq!(controller.advance(now), StepOutcome::Blocked);
        assert_eq!(controller.current_step(), Step::Theme);

        let notification = controller.notifications().current().unwrap();
        assert_eq!(notification.message, SELECT_THEME_MESSAGE);
        assert_eq!(notification.severity, Severity::Error);
    }

    #[test]
    fn test_advance_after_theme_selection() {
        let mut controller = controller();
        let now = Instant::now();

        controller.select_theme("startup", now).unwrap();
        assert!(controller.render().advance_enabled);
        assert_eq!(controller.advance(now), StepOutcome::Advanced(Step::Product));
        assert_eq!(controller.current_step(), Step::Product);
    }

    #[test]
    fn test_empty_product_step_scenario() {
        let mut controller = controller();
        let now = Instant::now();

        controller.select_theme("startup", now).unwrap();
        controller.advance(now);

        assert_eq!(controller.advance(now), StepOutcome::Blocked);
        assert_eq!(controller.current_step(), Step::Product);

        let notification = controller.notifications().current().unwrap();
        assert_eq!(notification.message, REQUIRED_FIELDS_MESSAGE);
        assert_eq!(notification.severity, Severity::Error);

        for name in [
            FieldName::ProductType,
            FieldName::ProductCategory,
            FieldName::ProductName,
        ] {
            assert_eq!(
                controller.field(name).error.as_deref(),
                Some("This field is required"),
                "{} should carry the required error",
                name
            );
        }
        assert!(!controller.field(FieldName::ProductDescription).has_error());
    }

    #[test]
    fn test_each_gate_moves_exactly_one_step() {
        let mut controller = controller();
        let now = Instant::now();

        controller.select_theme("corporate", now).unwrap();
        assert_eq!(controller.advance(now), StepOutcome::Advanced(Step::Product));

        fill_product_step(&mut controller);
        assert_eq!(controller.advance(now), StepOutcome::Advanced(Step::Pricing));

        // The pricing gate passes but there is no step after it
        fill(&mut controller, FieldName::NetPrice, "10");
        fill(&mut controller, FieldName::ListPrice, "12");
        fill(&mut controller, FieldName::StockLevel, "5");
        assert_eq!(controller.advance(now), StepOutcome::Unchanged);
        assert_eq!(controller.current_step(), Step::Pricing);
    }

    #[test]
    fn test_pricing_gate_blocks_on_missing_fields() {
        let mut controller = controller();
        let now = Instant::now();

        controller.select_theme("minimal", now).unwrap();
        controller.advance(now);
        fill_product_step(&mut controller);
        controller.advance(now);

        fill(&mut controller, FieldName::NetPrice, "10");
        assert_eq!(controller.advance(now), StepOutcome::Blocked);
        assert!(controller.field(FieldName::ListPrice).has_error());
        assert!(controller.field(FieldName::StockLevel).has_error());
        assert!(!controller.field(FieldName::NetPrice).has_error());
    }

    #[test]
    fn test_retreat_is_ungated() {
        let mut controller = controller();
        let now = Instant::now();

        assert_eq!(controller.retreat(now), StepOutcome::Unchanged);
        assert_eq!(controller.current_step(), Step::Theme);

        controller.select_theme("startup", now).unwrap();
        controller.advance(now);

        // Product step is invalid, going back still works
        assert_eq!(controller.retreat(now), StepOutcome::Retreated(Step::Theme));
        assert_eq!(controller.current_step(), Step::Theme);
        assert_eq!(controller.state().selected_theme(), Some("startup"));
    }

    #[test]
    fn test_retreat_from_pricing() {
        let mut controller = controller();
        let now = Instant::now();

        controller.select_theme("startup", now).unwrap();
        controller.advance(now);
        fill_product_step(&mut controller);
        controller.advance(now);

        assert_eq!(controller.retreat(now), StepOutcome::Retreated(Step::Product));
        assert_eq!(controller.retreat(now), StepOutcome::Retreated(Step::Theme));
        assert_eq!(controller.retreat(now), StepOutcome::Unchanged);
    }

    #[test]
    fn test_shortcuts_map_to_navigation() {
        let mut controller = controller();
        let now = Instant::now();

        assert_eq!(controller.shortcut(Shortcut::Advance, now), StepOutcome::Blocked);
        controller.select_theme("creative", now).unwrap();
        assert_eq!(
            controller.shortcut(Shortcut::Advance, now),
            StepOutcome::Advanced(Step::Product)
        );
        assert_eq!(
            controller.shortcut(Shortcut::Retreat, now),
            StepOutcome::Retreated(Step::Theme)
        );
    }

    #[test]
    fn test_render_marks_progress() {
        let mut controller = controller();
        let now = Instant::now();

        let view = controller.render();
        assert_eq!(view.active, Step::Theme);
        assert_eq!(
            view.progress.markers,
            [MarkerState::Active, MarkerState::Neutral, MarkerState::Neutral]
        );
        assert_eq!(view.progress.lines, [false, false]);

        controller.select_theme("startup", now).unwrap();
        controller.advance(now);
        fill_product_step(&mut controller);
        controller.advance(now);

        let view = controller.render();
        assert_eq!(view.active, Step::Pricing);
        assert_eq!(
            view.progress.markers,
            [MarkerState::Completed, MarkerState::Completed, MarkerState::Active]
        );
        assert_eq!(view.progress.lines, [true, true]);
    }

    #[test]
    fn test_step_change_fades_in() {
        let mut controller = controller();
        let now = Instant::now();

        controller.select_theme("startup", now).unwrap();
        controller.advance(now);
        assert!(controller.render().fading_in);

        controller.tick(now + Duration::from_millis(499));
        assert!(controller.render().fading_in);

        controller.tick(now + Duration::from_millis(500));
        assert!(!controller.render().fading_in);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut controller = controller();
        let now = Instant::now();

        controller.select_theme("startup", now).unwrap();
        controller.advance(now);
        fill(&mut controller, FieldName::ProductName, "Widget");

        controller.restart();
        assert_eq!(controller.current_step(), Step::Theme);
        assert!(controller.state().selected_theme().is_none());
        assert!(controller.state().form_data().is_empty());
        assert!(controller.field(FieldName::ProductName).value.is_empty());
        assert!(controller.notifications().current().is_none());
    }
}
