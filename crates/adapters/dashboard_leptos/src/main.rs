fn main() {
    leptos::mount::mount_to_body(daytrader_dashboard::App);
}
