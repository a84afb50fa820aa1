//! Particle Field entry point
//!
//! On the web: wires the particle background and page effects to the DOM.
//! Natively: runs the simulator headless and prints frame statistics.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, Event, EventTarget, HtmlCanvasElement, HtmlElement, HtmlFormElement,
        HtmlImageElement, HtmlInputElement, HtmlTextAreaElement, MouseEvent, Node, ScrollBehavior,
        ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
    };

    use particle_field::page::form::SEND_DELAY_MS;
    use particle_field::page::loader::{self, Loader};
    use particle_field::page::scroll::{self, SCROLL_THROTTLE_MS};
    use particle_field::page::skills;
    use particle_field::page::typewriter::{CHAR_INTERVAL_MS, START_DELAY_MS};
    use particle_field::page::{
        ContactForm, FieldError, Follower, FormField, MenuState, ProjectCatalog, ProjectDetails,
        Section, Throttle, Typewriter, body_overflow, follower, nav,
    };
    use particle_field::platform::{DateClock, LocalStorage, RafScheduler};
    use particle_field::renderer::CanvasSurface;
    use particle_field::{FieldConfig, Simulator, Theme};

    /// Header text when `#typewriter` carries no `data-text`
    const HEADER_TEXT: &str = "赵一鸣的作品集";
    const SENT_MESSAGE: &str = "消息已发送成功！我们会尽快回复您。";
    const COPIED_MESSAGE: &str = "联系方式已复制到剪贴板";
    const CARD_LIFT: &str = "translateY(-10px)";
    const CARD_REST: &str = "translateY(0)";

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Particle Field starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        setup_loader(&window, &document);
        setup_nav_menu(&document);
        setup_particle_field(&window, &document);
        setup_typewriter(&window, &document);
        setup_theme_toggle(&document);
        setup_scroll_effects(&window, &document);
        setup_contact_form(&window, &document);
        setup_project_modal(&document);
        setup_card_hover(&document);
        setup_skill_tags(&window, &document);
        setup_contact_dropdown(&window, &document);
        setup_mouse_follower(&window, &document);

        log::info!("Particle Field running!");
    }

    // === DOM helpers ===

    fn on_event(target: &EventTarget, name: &str, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(_)>::new(handler);
        let _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_mouse(target: &EventTarget, name: &str, handler: impl FnMut(MouseEvent) + 'static) {
        let closure = Closure::<dyn FnMut(_)>::new(handler);
        let _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn set_timeout(window: &Window, delay_ms: i32, f: impl FnOnce() + 'static) {
        let callback = Closure::once_into_js(f);
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms);
    }

    fn query_all(document: &Document, selector: &str) -> Vec<Element> {
        let Ok(list) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_class(element: &Element, class: &str, on: bool) {
        let classes = element.class_list();
        let _ = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }

    fn set_style(element: &Element, property: &str, value: &str) {
        if let Some(el) = element.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn set_body_overflow(body: Option<&HtmlElement>, overlay_open: bool) {
        if let Some(body) = body {
            let _ = body.style().set_property("overflow", body_overflow(overlay_open));
        }
    }

    fn viewport_size(window: &Window) -> (f32, f32) {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width as f32, height as f32)
    }

    fn scroll_to_top(window: &Window) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    // === Particle background ===

    fn setup_particle_field(window: &Window, document: &Document) {
        let Some(canvas) = document
            .get_element_by_id("particleCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::debug!("No particle canvas, background disabled");
            return;
        };
        let Some(mut surface) = CanvasSurface::from_canvas(&canvas) else {
            log::debug!("Canvas has no 2D context, background disabled");
            return;
        };

        let config = FieldConfig::from_attributes(
            canvas.get_attribute("data-preset").as_deref(),
            canvas.get_attribute("data-config").as_deref(),
        );

        let (width, height) = viewport_size(window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let scheduler = RafScheduler::new(window.clone());
        let frame_slot = scheduler.callback_slot();
        let seed = js_sys::Date::now() as u64;
        let sim = Rc::new(RefCell::new(Simulator::new(
            config, width, height, seed, DateClock, scheduler,
        )));

        // Frame callback, reused for every requestAnimationFrame
        {
            let sim = sim.clone();
            *frame_slot.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                sim.borrow_mut().on_frame(&mut surface);
            }));
        }

        {
            let sim = sim.clone();
            on_mouse(&canvas, "mousemove", move |event: MouseEvent| {
                sim.borrow_mut()
                    .on_pointer_move(event.client_x() as f32, event.client_y() as f32);
            });
        }

        {
            let sim = sim.clone();
            on_mouse(&canvas, "mouseout", move |_event: MouseEvent| {
                sim.borrow_mut().on_pointer_leave();
            });
        }

        {
            let sim = sim.clone();
            on_mouse(&canvas, "click", move |event: MouseEvent| {
                sim.borrow_mut()
                    .on_click(event.client_x() as f32, event.client_y() as f32);
            });
        }

        {
            let sim = sim.clone();
            let window_clone = window.clone();
            on_event(window, "resize", move |_| {
                let (width, height) = viewport_size(&window_clone);
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
                sim.borrow_mut().on_resize(width, height);
            });
        }

        sim.borrow_mut().start();
    }

    // === Header ===

    fn setup_typewriter(window: &Window, document: &Document) {
        let Some(element) = document.get_element_by_id("typewriter") else {
            return;
        };
        let text = element
            .get_attribute("data-text")
            .unwrap_or_else(|| HEADER_TEXT.to_string());
        let typewriter = Typewriter::new(&text);
        let window_clone = window.clone();
        set_timeout(window, START_DELAY_MS, move || {
            type_next(window_clone, element, typewriter)
        });
    }

    fn type_next(window: Window, element: Element, mut typewriter: Typewriter) {
        if typewriter.advance().is_none() {
            return;
        }
        element.set_text_content(Some(&typewriter.typed()));
        if typewriter.is_done() {
            return;
        }

        let window_clone = window.clone();
        set_timeout(&window, CHAR_INTERVAL_MS, move || {
            type_next(window_clone, element, typewriter)
        });
    }

    fn setup_loader(window: &Window, document: &Document) {
        let Some(element) = document.get_element_by_id("loaderContainer") else {
            return;
        };
        let state = Rc::new(Cell::new(Loader::default()));

        {
            let (state, element) = (state.clone(), element.clone());
            let window_clone = window.clone();
            let document_clone = document.clone();
            set_timeout(window, loader::HIDE_DELAY_MS, move || {
                hide_loader(&window_clone, &document_clone, &element, &state)
            });
        }

        // Fallback when the timer is starved by a slow page load
        let window_clone = window.clone();
        let document_clone = document.clone();
        on_event(window, "load", move |_| {
            hide_loader(&window_clone, &document_clone, &element, &state)
        });
    }

    fn hide_loader(
        window: &Window,
        document: &Document,
        element: &Element,
        state: &Cell<Loader>,
    ) {
        let mut overlay = state.get();
        let hid = overlay.hide();
        state.set(overlay);
        if !hid {
            return;
        }
        set_class(element, "hidden", true);
        let (window_clone, document) = (window.clone(), document.clone());
        set_timeout(window, loader::HIDE_RECHECK_MS, move || {
            reveal_elements(&window_clone, &document)
        });
    }

    // === Theme ===

    fn setup_theme_toggle(document: &Document) {
        let Some(root) = document.document_element() else {
            return;
        };
        let icon = document.query_selector(".theme-icon").ok().flatten();

        if let Some(saved) = LocalStorage::open().and_then(|storage| Theme::load(&storage)) {
            apply_theme(&root, icon.as_ref(), saved);
        }

        let Some(toggle) = document.get_element_by_id("themeToggle") else {
            return;
        };
        on_event(&toggle, "click", move |_| {
            let current = Theme::from_attribute(root.get_attribute("data-theme").as_deref());
            let next = current.toggled();
            apply_theme(&root, icon.as_ref(), next);
            if let Some(mut storage) = LocalStorage::open() {
                next.save(&mut storage);
            }
        });
    }

    fn apply_theme(root: &Element, icon: Option<&Element>, theme: Theme) {
        let _ = root.set_attribute("data-theme", theme.as_str());
        if let Some(icon) = icon {
            icon.set_text_content(Some(theme.icon()));
        }
    }

    // === Scrolling ===

    fn setup_scroll_effects(window: &Window, document: &Document) {
        let back_to_top = document.get_element_by_id("backToTop");
        let progress_bar = document.get_element_by_id("progressBar");
        let nav_bar = document.query_selector("nav").ok().flatten();

        reveal_elements(window, document);
        highlight_nav(window, document);

        // Once styles and layout have applied
        {
            let window_clone = window.clone();
            let document_clone = document.clone();
            set_timeout(window, loader::LAYOUT_RECHECK_MS, move || {
                reveal_elements(&window_clone, &document_clone)
            });
        }

        {
            let mut throttle = Throttle::new(SCROLL_THROTTLE_MS);
            let window_clone = window.clone();
            let document_clone = document.clone();
            let back_to_top = back_to_top.clone();
            on_event(window, "scroll", move |_| {
                let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                if let Some(nav_bar) = &nav_bar {
                    set_style(nav_bar, "box-shadow", scroll::nav_shadow(scroll_y));
                }

                if !throttle.ready(js_sys::Date::now()) {
                    return;
                }

                if let Some(button) = &back_to_top {
                    set_class(button, "visible", scroll::back_to_top_visible(scroll_y));
                }
                if let (Some(bar), Some(root)) = (&progress_bar, document_clone.document_element()) {
                    let percent = scroll::progress_percent(
                        scroll_y,
                        root.scroll_height() as f64,
                        root.client_height() as f64,
                    );
                    set_style(bar, "width", &format!("{}%", percent));
                }
                reveal_elements(&window_clone, &document_clone);
                highlight_nav(&window_clone, &document_clone);
            });
        }

        // Layout settles after images and fonts load
        {
            let window_clone = window.clone();
            let document_clone = document.clone();
            on_event(window, "load", move |_| {
                let (window, document) = (window_clone.clone(), document_clone.clone());
                set_timeout(&window_clone, loader::LOAD_RECHECK_MS, move || {
                    reveal_elements(&window, &document)
                });
            });
        }

        if let Some(button) = back_to_top {
            let window_clone = window.clone();
            on_event(&button, "click", move |_| scroll_to_top(&window_clone));
        }

        if let Some(header) = document.query_selector("header").ok().flatten() {
            let window_clone = window.clone();
            on_event(&header, "click", move |_| scroll_to_top(&window_clone));
        }
    }

    fn reveal_elements(window: &Window, document: &Document) {
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        for element in query_all(document, ".fade-in, .project-card, .skill-tag") {
            if scroll::should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
                set_class(&element, "visible", true);
            }
        }
        for section in query_all(document, "section") {
            if scroll::should_reveal(section.get_bounding_client_rect().top(), viewport_height) {
                set_class(&section, "fade-in", true);
            }
        }
    }

    fn highlight_nav(window: &Window, document: &Document) {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let sections: Vec<Section> = query_all(document, "section")
            .into_iter()
            .filter_map(|el| {
                let id = el.get_attribute("id")?;
                let top = el.dyn_ref::<HtmlElement>()?.offset_top() as f64;
                Some(Section { id, top })
            })
            .collect();
        let active = nav::active_section(&sections, scroll_y);

        for link in query_all(document, "nav a[href^=\"#\"], .column-title-link") {
            let href = link.get_attribute("href").unwrap_or_default();
            set_class(&link, "active", nav::is_active_link(&href, active));
        }
    }

    // === Navigation menu ===

    #[derive(Clone)]
    struct NavMenu {
        toggle: Element,
        list: Element,
        body: Option<HtmlElement>,
        state: Rc<Cell<MenuState>>,
    }

    impl NavMenu {
        fn apply(&self, open: bool) {
            set_class(&self.list, "active", open);
            set_class(&self.toggle, "open", open);
            set_body_overflow(self.body.as_ref(), open);
        }

        fn toggle(&self) {
            let mut state = self.state.get();
            let open = state.toggle();
            self.state.set(state);
            self.apply(open);
        }

        fn close(&self) {
            let mut state = self.state.get();
            if !state.is_open() {
                return;
            }
            state.close();
            self.state.set(state);
            self.apply(false);
        }

        fn contains(&self, target: Option<&Node>) -> bool {
            self.toggle.contains(target) || self.list.contains(target)
        }
    }

    fn setup_nav_menu(document: &Document) {
        let links = query_all(document, "nav ul li a");

        if let (Some(toggle), Some(list)) = (
            document.get_element_by_id("navToggle"),
            document.get_element_by_id("navList"),
        ) {
            let menu = NavMenu {
                toggle: toggle.clone(),
                list,
                body: document.body(),
                state: Rc::new(Cell::new(MenuState::default())),
            };

            {
                let menu = menu.clone();
                on_event(&toggle, "click", move |_| menu.toggle());
            }

            for link in &links {
                let menu = menu.clone();
                on_event(link, "click", move |_| menu.close());
            }

            on_event(document, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                if !menu.contains(target.as_ref()) {
                    menu.close();
                }
            });
        }

        // Smooth scroll for in-page anchors; other links navigate normally
        for link in links {
            let document_clone = document.clone();
            let link_clone = link.clone();
            on_event(&link, "click", move |event| {
                let Some(href) = link_clone.get_attribute("href") else {
                    return;
                };
                if !href.starts_with('#') {
                    return;
                }
                event.prevent_default();
                if let Ok(Some(target)) = document_clone.query_selector(&href) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            });
        }
    }

    // === Contact form ===

    fn setup_contact_form(window: &Window, document: &Document) {
        let Some(form) = document.get_element_by_id("contactForm") else {
            return;
        };
        let loader = document.query_selector(".loader").ok().flatten();

        for field in FormField::ALL {
            let Some(input) = document.get_element_by_id(field.id()) else {
                continue;
            };
            let document_clone = document.clone();
            on_event(&input, "input", move |_| {
                validate_input(&document_clone, field);
            });
        }

        // Lift the focused field's group slightly
        for input in query_all(document, ".form-group input, .form-group textarea") {
            let Some(group) = input.parent_element() else {
                continue;
            };
            {
                let group = group.clone();
                on_event(&input, "focus", move |_| {
                    set_style(&group, "transform", "scale(1.02)");
                    set_style(&group, "transition", "transform 0.3s ease");
                });
            }
            on_event(&input, "blur", move |_| set_style(&group, "transform", "scale(1)"));
        }

        let window_clone = window.clone();
        let document_clone = document.clone();
        let form_clone = form.clone();
        on_event(&form, "submit", move |event| {
            event.prevent_default();

            // Every field shows its own message
            let contact = read_contact_form(&document_clone);
            for field in FormField::ALL {
                if let Some(input) = document_clone.get_element_by_id(field.id()) {
                    show_validation(&document_clone, &input, contact.error(field));
                }
            }
            if !contact.errors().is_empty() {
                return;
            }

            if let Some(loader) = &loader {
                set_class(loader, "active", true);
            }
            log::info!("Contact form submitted");

            let (window, document, form, loader) = (
                window_clone.clone(),
                document_clone.clone(),
                form_clone.clone(),
                loader.clone(),
            );
            set_timeout(&window_clone, SEND_DELAY_MS, move || {
                if let Some(loader) = &loader {
                    set_class(loader, "active", false);
                }
                let _ = window.alert_with_message(SENT_MESSAGE);
                if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
                    form.reset();
                }
                for field in FormField::ALL {
                    if let Some(input) = document.get_element_by_id(field.id()) {
                        clear_field_error(&input);
                    }
                }
            });
        });
    }

    /// Validate one input as it is edited. Missing inputs are skipped.
    fn validate_input(document: &Document, field: FormField) {
        if let Some(input) = document.get_element_by_id(field.id()) {
            let error = field.validate(&input_value(&input)).err();
            show_validation(document, &input, error);
        }
    }

    fn show_validation(document: &Document, input: &Element, error: Option<FieldError>) {
        match error {
            Some(e) => show_field_error(document, input, &e.to_string()),
            None => clear_field_error(input),
        }
    }

    fn read_contact_form(document: &Document) -> ContactForm {
        let value = |field: FormField| {
            document
                .get_element_by_id(field.id())
                .map(|input| input_value(&input))
                .unwrap_or_default()
        };
        ContactForm {
            name: value(FormField::Name),
            email: value(FormField::Email),
            message: value(FormField::Message),
        }
    }

    fn input_value(element: &Element) -> String {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn error_sibling(input: &Element) -> Option<Element> {
        input
            .next_element_sibling()
            .filter(|el| el.class_list().contains("error-message"))
    }

    fn show_field_error(document: &Document, input: &Element, message: &str) {
        let error_el = match error_sibling(input) {
            Some(el) => el,
            None => {
                let Ok(el) = document.create_element("div") else {
                    return;
                };
                el.set_class_name("error-message");
                if let Some(parent) = input.parent_node() {
                    let _ = parent.append_child(&el);
                }
                el
            }
        };
        error_el.set_text_content(Some(message));
        set_style(&error_el, "display", "block");
        set_class(input, "error", true);
    }

    fn clear_field_error(input: &Element) {
        if let Some(error_el) = error_sibling(input) {
            set_style(&error_el, "display", "none");
        }
        set_class(input, "error", false);
    }

    // === Project modal ===

    fn setup_project_modal(document: &Document) {
        let Some(modal) = document.get_element_by_id("projectModal") else {
            return;
        };
        let catalog = Rc::new(ProjectCatalog::bundled());
        let body = document.body();

        for button in query_all(document, ".view-btn") {
            let document_clone = document.clone();
            let modal = modal.clone();
            let catalog = catalog.clone();
            let body = body.clone();
            let button_clone = button.clone();
            on_event(&button, "click", move |_| {
                let title = button_clone
                    .closest(".project-info")
                    .ok()
                    .flatten()
                    .and_then(|info| info.query_selector("h3").ok().flatten())
                    .and_then(|heading| heading.text_content());
                let Some(project) = title.as_deref().and_then(|t| catalog.get(t)) else {
                    log::debug!("No project details for {:?}", title);
                    return;
                };
                fill_modal(&document_clone, project);
                set_class(&modal, "active", true);
                set_body_overflow(body.as_ref(), true);
            });
        }

        if let Some(close) = document.get_element_by_id("closeModal") {
            let modal = modal.clone();
            let body = body.clone();
            on_event(&close, "click", move |_| close_modal(&modal, body.as_ref()));
        }

        // Backdrop click closes; clicks inside the dialog bubble up with another target
        let modal_clone = modal.clone();
        on_event(&modal, "click", move |event| {
            if event
                .target()
                .is_some_and(|target| js_sys::Object::is(&target, &modal_clone))
            {
                close_modal(&modal_clone, body.as_ref());
            }
        });
    }

    fn close_modal(modal: &Element, body: Option<&HtmlElement>) {
        set_class(modal, "active", false);
        set_body_overflow(body, false);
    }

    fn fill_modal(document: &Document, project: &ProjectDetails) {
        if let Some(el) = document.get_element_by_id("modalTitle") {
            el.set_text_content(Some(&project.title));
        }
        if let Some(image) = document
            .get_element_by_id("modalImage")
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            image.set_src(&project.image);
        }
        if let Some(el) = document.get_element_by_id("modalDescription") {
            el.set_text_content(Some(&project.description));
        }
        fill_list(document, "modalTech", "span", &project.tech);
        fill_list(document, "modalHighlights", "li", &project.highlights);
    }

    fn fill_list(document: &Document, container_id: &str, tag: &str, items: &[String]) {
        let Some(container) = document.get_element_by_id(container_id) else {
            return;
        };
        container.set_inner_html("");
        for item in items {
            if let Ok(el) = document.create_element(tag) {
                el.set_text_content(Some(item));
                let _ = container.append_child(&el);
            }
        }
    }

    // === Cards, skill tags, contact dropdown ===

    fn setup_card_hover(document: &Document) {
        for card in query_all(document, ".project-card") {
            {
                let card_clone = card.clone();
                on_event(&card, "mouseenter", move |_| {
                    set_style(&card_clone, "transform", CARD_LIFT)
                });
            }
            let card_clone = card.clone();
            on_event(&card, "mouseleave", move |_| {
                set_style(&card_clone, "transform", CARD_REST)
            });
        }
    }

    fn setup_skill_tags(window: &Window, document: &Document) {
        let tags = query_all(document, ".skill-tag");

        for tag in &tags {
            {
                let (tag_clone, window_clone) = (tag.clone(), window.clone());
                on_event(tag, "click", move |_| {
                    set_style(&tag_clone, "transform", skills::PRESSED_TRANSFORM);
                    let tag = tag_clone.clone();
                    set_timeout(&window_clone, skills::PRESS_RELEASE_MS, move || {
                        set_style(&tag, "transform", "scale(1)")
                    });
                });
            }
            {
                let tag_clone = tag.clone();
                on_event(tag, "mouseenter", move |_| {
                    set_style(&tag_clone, "animation", skills::HOVER_ANIMATION);
                    set_style(&tag_clone, "transform", skills::HOVER_TRANSFORM);
                    set_style(&tag_clone, "transition", "transform 0.3s ease");
                });
            }
            {
                let tag_clone = tag.clone();
                on_event(tag, "mouseleave", move |_| {
                    set_style(&tag_clone, "transform", "scale(1)")
                });
            }
            let tag_clone = tag.clone();
            on_event(tag, "animationend", move |_| set_style(&tag_clone, "animation", ""));
        }

        // Entrance cascade once the page has loaded
        let window_clone = window.clone();
        on_event(window, "load", move |_| {
            for (index, tag) in tags.iter().enumerate() {
                let (tag, window) = (tag.clone(), window_clone.clone());
                set_timeout(&window_clone, skills::entrance_delay_ms(index), move || {
                    set_style(&tag, "opacity", "0");
                    set_style(&tag, "transform", skills::HIDDEN_TRANSFORM);
                    set_timeout(&window, skills::ENTRANCE_SETTLE_MS, move || {
                        set_style(&tag, "transition", skills::ENTRANCE_TRANSITION);
                        set_style(&tag, "opacity", "1");
                        set_style(&tag, "transform", skills::RESTING_TRANSFORM);
                    });
                });
            }
        });
    }

    fn setup_contact_dropdown(window: &Window, document: &Document) {
        if document.query_selector(".contact-dropdown").ok().flatten().is_none() {
            return;
        }
        let Some(menu) = document.query_selector(".dropdown-menu").ok().flatten() else {
            return;
        };
        let Ok(links) = menu.query_selector_all("a") else {
            return;
        };

        for link in (0..links.length())
            .filter_map(|i| links.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
        {
            let (link_clone, window_clone) = (link.clone(), window.clone());
            on_event(&link, "click", move |event| {
                let href = link_clone.get_attribute("href").unwrap_or_default();
                if nav::opens_natively(&href) {
                    return;
                }
                event.prevent_default();
                let _ = window_clone.alert_with_message(COPIED_MESSAGE);
            });
        }
    }

    // === Mouse follower ===

    fn setup_mouse_follower(window: &Window, document: &Document) {
        let (Some(body), Ok(dot)) = (document.body(), document.create_element("div")) else {
            return;
        };
        dot.set_class_name("mouse-follower");
        let _ = body.append_child(&dot);

        let state = Rc::new(Cell::new(Follower::default()));
        let apply = {
            let dot = dot.clone();
            move |cursor: Follower| {
                for (class, on) in cursor.classes() {
                    set_class(&dot, class, on);
                }
            }
        };

        {
            let (state, apply, dot) = (state.clone(), apply.clone(), dot.clone());
            on_mouse(document, "mousemove", move |event: MouseEvent| {
                set_style(&dot, "left", &format!("{}px", event.client_x()));
                set_style(&dot, "top", &format!("{}px", event.client_y()));

                let over_clickable = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(follower::CLICKABLE_SELECTOR).ok().flatten())
                    .is_some();
                let mut cursor = state.get();
                cursor.on_move(over_clickable);
                state.set(cursor);
                apply(cursor);
            });
        }

        {
            let (state, apply) = (state.clone(), apply.clone());
            on_mouse(document, "mousedown", move |_event: MouseEvent| {
                let mut cursor = state.get();
                cursor.on_press();
                state.set(cursor);
                apply(cursor);
            });
        }

        {
            let (state, apply) = (state.clone(), apply.clone());
            on_mouse(document, "mouseup", move |_event: MouseEvent| {
                let mut cursor = state.get();
                cursor.on_release();
                state.set(cursor);
                apply(cursor);
            });
        }

        {
            let (state, apply) = (state.clone(), apply.clone());
            on_mouse(document, "mouseleave", move |_event: MouseEvent| {
                let mut cursor = state.get();
                cursor.on_leave();
                state.set(cursor);
                apply(cursor);
            });
        }

        let window_clone = window.clone();
        on_mouse(document, "mouseenter", move |event: MouseEvent| {
            let (width, height) = viewport_size(&window_clone);
            let mut cursor = state.get();
            cursor.on_enter(
                event.client_x() as f64,
                event.client_y() as f64,
                width as f64,
                height as f64,
            );
            state.set(cursor);
            apply(cursor);
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Particle Field (native) starting...");
    log::info!("Native mode runs the field headless - run with `trunk serve` for the web version");

    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Ten simulated seconds with scripted pointer, click and resize events
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use particle_field::renderer::FrameStats;
    use particle_field::sim::{ManualClock, QueuedScheduler};
    use particle_field::{FieldConfig, Simulator};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let clock = ManualClock::new(0.0);
    let host = QueuedScheduler::new();
    let mut sim = Simulator::new(
        FieldConfig::default(),
        1280.0,
        720.0,
        12345,
        clock.clone(),
        host.clone(),
    );
    sim.start();

    let mut stats = FrameStats::default();
    for frame in 0..600u32 {
        clock.advance(FRAME_MS);
        match frame {
            60 => sim.on_pointer_move(640.0, 360.0),
            120 => sim.on_click(640.0, 360.0),
            240 => sim.on_pointer_leave(),
            300 => sim.on_resize(1920.0, 1080.0),
            _ => {}
        }
        if host.fire().is_some() {
            sim.on_frame(&mut stats);
        }
    }

    println!(
        "Rendered {} frames: {} circles, {} links, {} particles alive ({} frame requests cancelled)",
        stats.clears,
        stats.circles,
        stats.lines,
        sim.field().len(),
        host.cancelled()
    );
}
