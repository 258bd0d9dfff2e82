//! Unit tests for guide navigation.

use super::{GuideError, GuideSection, Route};
use rstest::rstest;

#[rstest]
fn sections_are_listed_in_sidebar_order() {
    let ids: Vec<&str> = GuideSection::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(
        ids,
        vec![
            "prerequisites",
            "local-setup",
            "gateway-setup",
            "using-agents",
            "production"
        ]
    );
}

#[rstest]
#[case(GuideSection::Prerequisites, "Prerequisites", "📋")]
#[case(GuideSection::LocalSetup, "Local Development", "💻")]
#[case(GuideSection::GatewaySetup, "Gateway Setup", "🚀")]
#[case(GuideSection::UsingAgents, "Using Agents", "🤖")]
#[case(GuideSection::Production, "Production Setup", "🏭")]
fn sections_carry_titles_and_icons(
    #[case] section: GuideSection,
    #[case] title: &str,
    #[case] icon: &str,
) {
    assert_eq!(section.title(), title);
    assert_eq!(section.icon(), icon);
    assert_eq!(GuideSection::try_from(section.id()), Ok(section));
}

#[rstest]
fn default_section_is_prerequisites() {
    assert_eq!(GuideSection::default(), GuideSection::Prerequisites);
}

#[rstest]
#[case("faq")]
#[case("Prerequisites")]
#[case("")]
fn unknown_section_ids_are_rejected(#[case] id: &str) {
    assert_eq!(
        GuideSection::try_from(id),
        Err(GuideError::UnknownSection(id.to_owned()))
    );
}

#[rstest]
#[case("/", Route::Agents)]
#[case("", Route::Agents)]
#[case("/agents/", Route::Agents)]
#[case("/agents", Route::Agents)]
#[case("/somewhere/else/", Route::Agents)]
#[case("/how-to/", Route::Guide(GuideSection::Prerequisites))]
#[case("/how-to/local-setup/", Route::Guide(GuideSection::LocalSetup))]
#[case("/how-to/production", Route::Guide(GuideSection::Production))]
#[case("/how-to/unknown/", Route::Guide(GuideSection::Prerequisites))]
#[case("/how-to/using-agents/extra/", Route::Agents)]
fn paths_resolve_to_pages(#[case] path: &str, #[case] expected: Route) {
    assert_eq!(Route::resolve(path), expected);
}

#[rstest]
#[case(Route::Agents, "/agents/")]
#[case(Route::Guide(GuideSection::GatewaySetup), "/how-to/gateway-setup/")]
fn routes_have_canonical_paths(#[case] route: Route, #[case] expected: &str) {
    assert_eq!(route.canonical_path(), expected);
    assert_eq!(route.to_string(), expected);
    assert_eq!(Route::resolve(expected), route);
}

#[rstest]
#[case("/", true)]
#[case("/how-to/", true)]
#[case("/how-to/unknown/", true)]
#[case("/agents/", false)]
#[case("/how-to/prerequisites/", false)]
fn non_canonical_paths_need_a_redirect(#[case] path: &str, #[case] expected: bool) {
    assert_eq!(Route::needs_redirect(path), expected);
}

#[rstest]
fn sections_serialise_as_their_ids() {
    let json = serde_json::to_string(&GuideSection::UsingAgents).expect("serialise");
    assert_eq!(json, "\"using-agents\"");
}
