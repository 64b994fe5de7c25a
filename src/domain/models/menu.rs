//! Navigation menu tree
//!
//! The tree shape is fixed when the configuration is loaded. The only mutable
//! field is `meta.expanded`, changed exclusively through [`MenuTree::set_expanded`]
//! (or [`MenuTree::commit`] for commands coming from the view layer).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::Result;
use crate::shared::logging::log_menu_expand;

/// Display metadata of a menu node.
///
/// `expanded: None` means the node has no expansion flag at all, which is
/// different from a collapsed group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
}

/// Leaf entry: a route and the symbolic key of the view rendered for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub path: String,
    pub component_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MenuMeta>,
}

/// Composite entry with an expansion flag and ordered children.
///
/// Unknown fields are rejected so a leaf missing `componentKey` fails to parse
/// instead of turning into an empty group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuGroup {
    pub meta: MenuMeta,
    #[serde(default)]
    pub children: Vec<MenuNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuNode {
    Item(MenuItem),
    Group(MenuGroup),
}

impl MenuNode {
    pub fn meta(&self) -> Option<&MenuMeta> {
        match self {
            MenuNode::Item(item) => item.meta.as_ref(),
            MenuNode::Group(group) => Some(&group.meta),
        }
    }

    fn meta_mut(&mut self) -> Option<&mut MenuMeta> {
        match self {
            MenuNode::Item(item) => item.meta.as_mut(),
            MenuNode::Group(group) => Some(&mut group.meta),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.meta().and_then(|m| m.expanded).unwrap_or(false)
    }

    /// Label shown in the sidebar: `meta.label` for groups, `name` for leaves
    pub fn display_label(&self) -> &str {
        match self {
            MenuNode::Item(item) => &item.name,
            MenuNode::Group(group) => group.meta.label.as_deref().unwrap_or_default(),
        }
    }
}

/// Direct reference to a node: the child-index path from the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(pub Vec<usize>);

impl NodePath {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

/// Addresses a node for mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Position within the top-level sequence
    Index(usize),
    /// Direct node reference (no known top-level index)
    Node(NodePath),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Index(i) => write!(f, "index:{}", i),
            Locator::Node(path) => write!(f, "node:{}", path),
        }
    }
}

/// `EXPAND_MENU` command as dispatched by the view layer.
///
/// `index` is `-1` when the caller only holds a node reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandMenu {
    pub index: i64,
    #[serde(default)]
    pub item: Option<NodePath>,
    pub expanded: bool,
}

impl ExpandMenu {
    pub fn at_index(index: usize, expanded: bool) -> Self {
        Self {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            item: None,
            expanded,
        }
    }

    pub fn for_node(item: NodePath, expanded: bool) -> Self {
        Self {
            index: -1,
            item: Some(item),
            expanded,
        }
    }

    pub fn locator(&self) -> Option<Locator> {
        if self.index > -1 {
            usize::try_from(self.index).ok().map(Locator::Index)
        } else {
            self.item.clone().map(Locator::Node)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    pub items: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(items: Vec<MenuNode>) -> Self {
        Self { items }
    }

    /// Parse the menu configuration format (a JSON array of entries)
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn node(&self, path: &NodePath) -> Option<&MenuNode> {
        let (first, rest) = path.0.split_first()?;
        let mut node = self.items.get(*first)?;
        for index in rest {
            node = match node {
                MenuNode::Group(group) => group.children.get(*index)?,
                MenuNode::Item(_) => return None,
            };
        }
        Some(node)
    }

    fn node_mut(&mut self, path: &NodePath) -> Option<&mut MenuNode> {
        let (first, rest) = path.0.split_first()?;
        let mut node = self.items.get_mut(*first)?;
        for index in rest {
            node = match node {
                MenuNode::Group(group) => group.children.get_mut(*index)?,
                MenuNode::Item(_) => return None,
            };
        }
        Some(node)
    }

    /// Set the expansion flag of the located node.
    ///
    /// An index mutates the top-level slot when it exists and carries a `meta`.
    /// A node reference mutates only when the node already has an `expanded` key.
    /// Anything else is a silent no-op. Returns whether the tree changed.
    pub fn set_expanded(&mut self, locator: &Locator, expanded: bool) -> bool {
        let applied = match locator {
            Locator::Index(index) => match self.items.get_mut(*index).and_then(MenuNode::meta_mut) {
                Some(meta) => {
                    meta.expanded = Some(expanded);
                    true
                }
                None => false,
            },
            Locator::Node(path) => match self.node_mut(path).and_then(MenuNode::meta_mut) {
                Some(meta) if meta.expanded.is_some() => {
                    meta.expanded = Some(expanded);
                    true
                }
                _ => false,
            },
        };

        log_menu_expand(&locator.to_string(), expanded, applied);
        applied
    }

    /// Apply an `EXPAND_MENU` command
    pub fn commit(&mut self, command: &ExpandMenu) -> bool {
        match command.locator() {
            Some(locator) => self.set_expanded(&locator, command.expanded),
            None => false,
        }
    }

    /// All leaves, depth-first
    pub fn leaves(&self) -> Vec<&MenuItem> {
        fn walk<'a>(nodes: &'a [MenuNode], out: &mut Vec<&'a MenuItem>) {
            for node in nodes {
                match node {
                    MenuNode::Item(item) => out.push(item),
                    MenuNode::Group(group) => walk(&group.children, out),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }

    /// Resolve a route path to its leaf. Paths are expected to be unique; the
    /// first depth-first match wins.
    pub fn find_by_path(&self, path: &str) -> Option<&MenuItem> {
        self.leaves().into_iter().find(|item| item.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, path: &str) -> MenuNode {
        MenuNode::Item(MenuItem {
            name: name.to_string(),
            path: path.to_string(),
            component_key: name.to_lowercase(),
            meta: None,
        })
    }

    fn group(label: &str, expanded: Option<bool>, children: Vec<MenuNode>) -> MenuNode {
        MenuNode::Group(MenuGroup {
            meta: MenuMeta {
                label: Some(label.to_string()),
                icon: None,
                expanded,
            },
            children,
        })
    }

    fn sample_tree() -> MenuTree {
        MenuTree::new(vec![
            leaf("Login", "/login"),
            group("Administration", Some(true), vec![leaf("Users", "/users")]),
            group(
                "Tools",
                Some(false),
                vec![
                    leaf("Transit", "/transit"),
                    group("Nested", Some(false), vec![leaf("Deep", "/deep")]),
                    group("Flagless", None, vec![]),
                ],
            ),
        ])
    }

    #[test]
    fn test_set_expanded_by_index_leaves_siblings_unchanged() {
        let mut tree = sample_tree();

        assert!(tree.set_expanded(&Locator::Index(2), true));

        assert!(tree.items[2].is_expanded());
        assert!(tree.items[1].is_expanded());
        // No cascade into children
        let nested = tree.node(&NodePath(vec![2, 1])).unwrap();
        assert!(!nested.is_expanded());
    }

    #[test]
    fn test_set_expanded_by_index_ignores_missing_slot() {
        let mut tree = sample_tree();
        let before = tree.clone();

        assert!(!tree.set_expanded(&Locator::Index(42), true));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_set_expanded_by_index_ignores_slot_without_meta() {
        let mut tree = sample_tree();
        let before = tree.clone();

        assert!(!tree.set_expanded(&Locator::Index(0), true));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_set_expanded_by_index_adds_flag_to_meta() {
        let mut tree = MenuTree::new(vec![MenuNode::Item(MenuItem {
            name: "Secrets".to_string(),
            path: "/secrets".to_string(),
            component_key: "secrets".to_string(),
            meta: Some(MenuMeta {
                icon: Some("fa-list".to_string()),
                ..Default::default()
            }),
        })]);

        assert!(tree.set_expanded(&Locator::Index(0), true));
        assert_eq!(tree.items[0].meta().unwrap().expanded, Some(true));
    }

    #[test]
    fn test_set_expanded_by_reference() {
        let mut tree = sample_tree();
        let nested = NodePath(vec![2, 1]);

        assert!(tree.set_expanded(&Locator::Node(nested.clone()), true));
        assert!(tree.node(&nested).unwrap().is_expanded());
        // Parent untouched
        assert!(!tree.items[2].is_expanded());
    }

    #[test]
    fn test_set_expanded_by_reference_without_flag_is_noop() {
        let mut tree = sample_tree();
        let before = tree.clone();

        assert!(!tree.set_expanded(&Locator::Node(NodePath(vec![2, 2])), true));
        assert!(!tree.set_expanded(&Locator::Node(NodePath(vec![0])), true));
        assert!(!tree.set_expanded(&Locator::Node(NodePath(vec![9, 9])), true));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_commit_resolves_locator() {
        let mut tree = sample_tree();

        assert!(tree.commit(&ExpandMenu::at_index(1, false)));
        assert!(!tree.items[1].is_expanded());

        assert!(tree.commit(&ExpandMenu::for_node(NodePath(vec![2, 1]), true)));
        assert!(tree.node(&NodePath(vec![2, 1])).unwrap().is_expanded());

        let orphan = ExpandMenu {
            index: -1,
            item: None,
            expanded: true,
        };
        assert!(!tree.commit(&orphan));
    }

    #[test]
    fn test_expand_command_deserializes() {
        let command: ExpandMenu =
            serde_json::from_str(r#"{"index": -1, "item": [2, 1], "expanded": true}"#).unwrap();

        assert_eq!(command.locator(), Some(Locator::Node(NodePath(vec![2, 1]))));
    }

    #[test]
    fn test_from_json_parses_items_and_groups() {
        let json = r#"[
            {"name": "Login", "path": "/login", "componentKey": "login", "meta": {"icon": "fa-lock"}},
            {"meta": {"label": "Tools", "icon": "fa-wrench", "expanded": true},
             "children": [{"name": "Transit", "path": "/transit", "componentKey": "tools/Transit"}]}
        ]"#;

        let tree = MenuTree::from_json(json).unwrap();

        assert_eq!(tree.items.len(), 2);
        assert!(matches!(tree.items[0], MenuNode::Item(_)));
        assert_eq!(tree.items[1].display_label(), "Tools");
        assert!(tree.items[1].is_expanded());
        assert_eq!(tree.find_by_path("/transit").unwrap().component_key, "tools/Transit");
    }

    #[test]
    fn test_from_json_rejects_leaf_without_component_key() {
        let json = r#"[{"name": "Users", "path": "/users", "meta": {"icon": "fa-user"}}]"#;

        assert!(MenuTree::from_json(json).is_err());
    }

    #[test]
    fn test_find_by_path_walks_groups() {
        let tree = sample_tree();

        assert_eq!(tree.find_by_path("/deep").unwrap().name, "Deep");
        assert!(tree.find_by_path("/missing").is_none());
        assert_eq!(tree.leaves().len(), 4);
    }

    #[test]
    fn test_node_path_display() {
        assert_eq!(NodePath::root(2).child(1).to_string(), "/2/1");
        assert_eq!(Locator::Index(3).to_string(), "index:3");
    }
}
