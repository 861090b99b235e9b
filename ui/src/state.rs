use leptos::*;

/// Mobile navigation menu, shared by the toggle button and the menu links.
#[derive(Clone, Copy)]
pub struct MenuCtx {
    pub open: RwSignal<bool>,
}

impl MenuCtx {
    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

pub fn mobile_menu_class(open: bool) -> &'static str {
    if open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    }
}

pub fn provide_menu_ctx() -> MenuCtx {
    let ctx = MenuCtx {
        open: create_rw_signal(false),
    };
    provide_context(ctx);
    ctx
}

pub fn use_menu_ctx() -> MenuCtx {
    use_context::<MenuCtx>().expect("MenuCtx not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_class_follows_state() {
        assert_eq!(mobile_menu_class(false), "mobile-menu");
        assert_eq!(mobile_menu_class(true), "mobile-menu open");
    }

    #[test]
    fn toggle_and_close() {
        let runtime = create_runtime();
        let menu = MenuCtx {
            open: create_rw_signal(false),
        };
        menu.toggle();
        assert!(menu.open.get_untracked());
        menu.toggle();
        assert!(!menu.open.get_untracked());
        menu.toggle();
        menu.close();
        assert!(!menu.open.get_untracked());
        runtime.dispose();
    }
}
