//! Contract tests for the endpoint table and URL composition
//!
//! Every supported resource action must map to a stable URL path under the
//! versioned base, and unsupported combinations must be rejected locally.

use fsregister_core::{
    modifier_path,
    url::{regulated_markets_url, resource_url, search_url},
    ResourceAction, ResourceType, ValidationError, DEFAULT_BASE_URL,
};

const ROOT: &str = "https://register.fca.org.uk/services/V0.1";

fn action(name: &str) -> ResourceAction {
    let token = match name {
        "requirement-investment-types" => Some("OR-0262545"),
        "passport-permissions" => Some("Gibraltar"),
        _ => None,
    };
    ResourceAction::parse(name, token).expect("known action")
}

fn path_for(resource_type: ResourceType, identifier: &str, name: &str) -> String {
    let action = action(name);
    let modifiers = modifier_path(resource_type, &action).expect("supported action");
    resource_url(DEFAULT_BASE_URL, resource_type, identifier, modifiers.as_slice())
        .trim_start_matches(ROOT)
        .to_owned()
}

#[test]
fn firm_actions_map_to_documented_paths() {
    let expected = [
        ("details", "/Firm/122702"),
        ("names", "/Firm/122702/Names"),
        ("addresses", "/Firm/122702/Address"),
        ("controlled-functions", "/Firm/122702/CF"),
        ("individuals", "/Firm/122702/Individuals"),
        ("permissions", "/Firm/122702/Permissions"),
        ("requirements", "/Firm/122702/Requirements"),
        (
            "requirement-investment-types",
            "/Firm/122702/Requirements/OR-0262545/InvestmentTypes",
        ),
        ("regulators", "/Firm/122702/Regulators"),
        ("passports", "/Firm/122702/Passports"),
        (
            "passport-permissions",
            "/Firm/122702/Passports/Gibraltar/Permission",
        ),
        ("waivers", "/Firm/122702/Waivers"),
        ("exclusions", "/Firm/122702/Exclusions"),
        ("disciplinary-history", "/Firm/122702/DisciplinaryHistory"),
        ("appointed-representatives", "/Firm/122702/AR"),
    ];

    for (name, path) in expected {
        assert_eq!(path_for(ResourceType::Firm, "122702", name), path, "{name}");
    }
}

#[test]
fn individual_and_fund_actions_map_to_documented_paths() {
    let expected = [
        (ResourceType::Individual, "details", "/Individuals/MXC29012"),
        (ResourceType::Individual, "controlled-functions", "/Individuals/MXC29012/CF"),
        (
            ResourceType::Individual,
            "disciplinary-history",
            "/Individuals/MXC29012/DisciplinaryHistory",
        ),
        (ResourceType::Fund, "details", "/CIS/185045"),
        (ResourceType::Fund, "names", "/CIS/185045/Names"),
        (ResourceType::Fund, "subfunds", "/CIS/185045/Subfund"),
    ];

    for (resource_type, name, path) in expected {
        let identifier = match resource_type {
            ResourceType::Individual => "MXC29012",
            _ => "185045",
        };
        assert_eq!(path_for(resource_type, identifier, name), path, "{name}");
    }
}

#[test]
fn support_matrix_covers_every_action_name() {
    let supported = |resource_type: ResourceType| {
        ResourceAction::NAMES
            .iter()
            .filter(|name| action(name).supports(resource_type))
            .count()
    };

    assert_eq!(supported(ResourceType::Firm), 15);
    assert_eq!(supported(ResourceType::Individual), 3);
    assert_eq!(supported(ResourceType::Fund), 3);
}

#[test]
fn unsupported_actions_are_rejected() {
    let err = modifier_path(ResourceType::Fund, &ResourceAction::Waivers).expect_err("unsupported");
    assert_eq!(
        err,
        ValidationError::UnsupportedAction {
            action: "waivers",
            resource_type: ResourceType::Fund,
        }
    );
    assert!(modifier_path(ResourceType::Firm, &ResourceAction::Subfunds).is_err());
    assert!(modifier_path(ResourceType::Individual, &ResourceAction::Names).is_err());
}

#[test]
fn detail_urls_accept_zero_to_three_modifiers() {
    let cases: [(&[&str], &str); 4] = [
        (&[], "/Firm/113849"),
        (&["Names"], "/Firm/113849/Names"),
        (&["Passports", "Gibraltar"], "/Firm/113849/Passports/Gibraltar"),
        (
            &["/Passports/", "/Gibraltar", "Permission/"],
            "/Firm/113849/Passports/Gibraltar/Permission",
        ),
    ];

    for (modifiers, path) in cases {
        let url = resource_url(DEFAULT_BASE_URL, ResourceType::Firm, "113849", modifiers);
        assert_eq!(url, format!("{ROOT}{path}"));
        assert!(!url.trim_start_matches("https://").contains("//"));
    }
}

#[test]
fn search_and_market_urls_use_versioned_root() {
    assert_eq!(
        search_url(DEFAULT_BASE_URL, "hiscox insurance company", ResourceType::Firm),
        format!("{ROOT}/Search?q=hiscox%20insurance%20company&type=firm")
    );
    assert_eq!(
        search_url(DEFAULT_BASE_URL, "mark carney", ResourceType::Individual),
        format!("{ROOT}/Search?q=mark%20carney&type=individual")
    );
    assert_eq!(
        regulated_markets_url(DEFAULT_BASE_URL),
        format!("{ROOT}/CommonSearch?q=RM")
    );
}
