//! The document tree.
//!
//! Every visual element in a file is a [`Node`]: frames, vectors, text
//! boxes, component sets, and so on, tagged by [`NodeType`] and nested
//! through `children`. The node record is flat; fields that only apply to
//! some node types are optional and absent from the wire for the rest.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    component::Component,
    constraint::LayoutConstraint,
    easing::EasingType,
    effect::Effect,
    file::File,
    geometry::Rectangle,
    layout::{
        AxisSizingMode, CounterAxisAlignItems, LayoutAlign, LayoutMode, LayoutPositioning,
        PrimaryAxisAlignItems,
    },
    paint::Paint,
    style::StyleKey,
    text::TypeStyle,
};

/// Position of a stroke relative to the vector outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    /// stroke drawn inside the shape boundary
    Inside,
    /// stroke drawn outside the shape boundary
    Outside,
    /// stroke drawn centered along the shape boundary
    Center,
}

/// Individual stroke weights, present only when the four sides differ.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct StrokeWeights {
    /// The top stroke weight
    pub top: f64,
    /// The right stroke weight
    pub right: f64,
    /// The bottom stroke weight
    pub bottom: f64,
    /// The left stroke weight
    pub left: f64,
}

/// The kind of a node. A node can have additional properties associated
/// with it depending on its type.
///
/// [Figma documentation](https://www.figma.com/developers/api#node-types)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Vector,
    BooleanOperation,
    Star,
    Line,
    Ellipse,
    RegularPolygon,
    Rectangle,
    Text,
    Slice,
    Component,
    ComponentSet,
    Instance,
    Sticky,
    ShapeWithText,
    Connector,
    Section,
}

/// A single element in a document's render tree.
///
/// [Figma documentation](https://www.figma.com/developers/api#node-types)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// A string uniquely identifying this node within the document.
    pub id: String,
    /// The name given to the node by the user in the tool.
    pub name: String,
    /// Whether or not the node is visible on the canvas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// The type of the node
    pub r#type: NodeType,
    /// An array of nodes that are direct children of this node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    /// Background color of the canvas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// An array of fill paints applied to the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    /// An array of stroke paints applied to the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Paint>>,
    /// The weight of strokes on the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    /// Per-side stroke weights. Only returned if individual stroke weights
    /// are used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_stroke_weights: Option<StrokeWeights>,
    /// Position of stroke relative to vector outline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<StrokeAlign>,
    /// Dash and gap lengths the vector path follows, e.g. `[1, 2]` for a
    /// dash of length 1 followed by a gap of length 2, repeated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dashes: Option<Vec<f64>>,
    /// Radius of each corner of the node if a single radius is set for all
    /// corners
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    /// Radius of each corner, starting in the top left and proceeding
    /// clockwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle_corner_radii: Option<[f64; 4]>,
    /// The duration of the prototyping transition on this node (in
    /// milliseconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<f64>,
    /// The easing curve used in the prototyping transition on this node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_easing: Option<EasingType>,
    /// Opacity of the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Bounding box of the node in absolute space coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<Rectangle>,
    /// The bounds of the rendered node in absolute space coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_render_bounds: Option<Rectangle>,
    /// Constraints relative to the containing frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<LayoutConstraint>,
    /// Whether this layer uses auto-layout to position its children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    /// Sizing mode of the primary axis. Only applicable for auto-layout
    /// frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_sizing_mode: Option<AxisSizingMode>,
    /// Sizing mode of the counter axis. Only applicable for auto-layout
    /// frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_sizing_mode: Option<AxisSizingMode>,
    /// Alignment of children along the primary axis. Only applicable for
    /// auto-layout frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<PrimaryAxisAlignItems>,
    /// Alignment of children along the counter axis. Only applicable for
    /// auto-layout frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<CounterAxisAlignItems>,
    /// The distance between children of the frame. Can be negative. Only
    /// applicable for auto-layout frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    /// The padding between the left border of the frame and its children.
    /// Only applicable for auto-layout frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    /// The padding between the right border of the frame and its children.
    /// Only applicable for auto-layout frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    /// The padding between the top border of the frame and its children.
    /// Only applicable for auto-layout frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    /// The padding between the bottom border of the frame and its children.
    /// Only applicable for auto-layout frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    /// How this node aligns against the counter axis of its auto-layout
    /// parent. Only applicable for direct children of auto-layout frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_align: Option<LayoutAlign>,
    /// Whether this node stretches along the primary axis of its
    /// auto-layout parent. 0 corresponds to a fixed size and 1 to stretch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_grow: Option<f64>,
    /// Whether this node participates in auto-layout flow or is absolutely
    /// positioned. Only applicable for direct children of auto-layout
    /// frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_positioning: Option<LayoutPositioning>,
    /// An array of effects attached to this node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    /// A mapping of style slot to style ID for styles present on this node.
    /// The style ID can be used to look up more information in the
    /// file-level style table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<IndexMap<StyleKey, String>>,
    /// Text contained within a text box
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    /// Style of text including font family and weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TypeStyle>,
}

impl Node {
    /// Whether the node is visible on the canvas. Defaults to `true` when
    /// the API omits the field.
    pub fn visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// The node opacity, defaulting to fully opaque.
    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    /// The canvas background color, if any.
    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    /// The absolute bounding box, if the node has one.
    pub fn absolute_bounding_box(&self) -> Option<&Rectangle> {
        self.absolute_bounding_box.as_ref()
    }

    /// The uniform corner radius, if a single radius is set.
    pub fn corner_radius(&self) -> Option<f64> {
        self.corner_radius
    }

    /// The four corner radii, falling back to the uniform radius repeated
    /// when only `corner_radius` is set.
    pub fn rectangle_corner_radii(&self) -> Option<[f64; 4]> {
        self.rectangle_corner_radii
            .or_else(|| self.corner_radius.map(|r| [r, r, r, r]))
    }

    /// The prototyping transition duration in milliseconds, if set.
    pub fn transition_duration(&self) -> Option<f64> {
        self.transition_duration
    }

    /// The prototyping transition easing curve, if set.
    pub fn transition_easing(&self) -> Option<&EasingType> {
        self.transition_easing.as_ref()
    }

    /// Left auto-layout padding, defaulting to zero.
    pub fn padding_left(&self) -> f64 {
        self.padding_left.unwrap_or(0.0)
    }

    /// Right auto-layout padding, defaulting to zero.
    pub fn padding_right(&self) -> f64 {
        self.padding_right.unwrap_or(0.0)
    }

    /// Top auto-layout padding, defaulting to zero.
    pub fn padding_top(&self) -> f64 {
        self.padding_top.unwrap_or(0.0)
    }

    /// Bottom auto-layout padding, defaulting to zero.
    pub fn padding_bottom(&self) -> f64 {
        self.padding_bottom.unwrap_or(0.0)
    }

    /// The direct children of this node. Leaf node types have none.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or_default()
    }

    /// The direct children that are visible on the canvas.
    pub fn enabled_children(&self) -> impl Iterator<Item = &Node> {
        self.children().iter().filter(|c| c.visible())
    }

    /// The fill paints applied to this node.
    pub fn fills(&self) -> &[Paint] {
        self.fills.as_deref().unwrap_or_default()
    }

    /// The stroke paints applied to this node.
    pub fn strokes(&self) -> &[Paint] {
        self.strokes.as_deref().unwrap_or_default()
    }

    /// The uniform stroke weight, if set.
    pub fn stroke_weight(&self) -> Option<f64> {
        self.stroke_weight
    }

    /// The stroke alignment, if set.
    pub fn stroke_align(&self) -> Option<&StrokeAlign> {
        self.stroke_align.as_ref()
    }

    /// The component metadata for this node, looked up from the file-level
    /// component table by node ID.
    pub fn component<'a>(&self, file: &'a File) -> Option<&'a Component> {
        file.components.get(&self.id)
    }

    /// Walks the subtree below this node depth-first, yielding each
    /// descendant together with its ancestor stack.
    ///
    /// The stack starts at this node and ends with the yielded node itself,
    /// so `stack.iter().nth_back(1)` is the direct parent. This node is not
    /// yielded on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// # use easel_schema::file::File;
    /// # let json = r#"{
    /// #   "document": {"id": "0:0", "name": "Document", "type": "DOCUMENT", "children": [
    /// #     {"id": "0:1", "name": "Page", "type": "CANVAS", "children": [
    /// #       {"id": "1:1", "name": "Frame", "type": "FRAME"}
    /// #     ]}
    /// #   ]},
    /// #   "components": {}, "styles": {}, "name": "Demo", "schemaVersion": 0, "version": "1"
    /// # }"#;
    /// # let file: File = serde_json::from_str(json).unwrap();
    /// let names: Vec<&str> = file
    ///     .document
    ///     .depth_first_stack_iter()
    ///     .map(|(node, _stack)| node.name.as_str())
    ///     .collect();
    /// assert_eq!(names, ["Page", "Frame"]);
    /// ```
    pub fn depth_first_stack_iter(&self) -> NodeDepthFirstStackIterator<'_> {
        NodeDepthFirstStackIterator {
            stack: vec![self],
            iter_stack: vec![self.children().iter()],
        }
    }
}

/// Depth-first traversal over a node's descendants.
///
/// Created by [`Node::depth_first_stack_iter`].
pub struct NodeDepthFirstStackIterator<'a> {
    iter_stack: Vec<std::slice::Iter<'a, Node>>,
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for NodeDepthFirstStackIterator<'a> {
    type Item = (&'a Node, Vec<&'a Node>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut bottom_of_iter_stack = self.iter_stack.pop()?;
            let bottom_of_stack = self.stack.pop()?;
            if let Some(current) = bottom_of_iter_stack.next() {
                self.iter_stack.push(bottom_of_iter_stack);
                self.iter_stack.push(current.children().iter());
                self.stack.push(bottom_of_stack);
                self.stack.push(current);
                return Some((current, self.stack.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, name: &str, node_type: NodeType) -> Node {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "type": serde_json::to_value(node_type).expect("serializable"),
        }))
        .expect("valid node JSON")
    }

    fn branch(id: &str, name: &str, node_type: NodeType, children: Vec<Node>) -> Node {
        let mut node = leaf(id, name, node_type);
        node.children = Some(children);
        node
    }

    #[test]
    fn test_node_type_wire_tags() {
        assert_eq!(
            serde_json::to_string(&NodeType::ComponentSet).expect("serializable"),
            r#""COMPONENT_SET""#
        );
        assert_eq!(
            serde_json::to_string(&NodeType::BooleanOperation).expect("serializable"),
            r#""BOOLEAN_OPERATION""#
        );
        let parsed: NodeType = serde_json::from_str(r#""SHAPE_WITH_TEXT""#).expect("known tag");
        assert_eq!(parsed, NodeType::ShapeWithText);
    }

    #[test]
    fn test_unknown_node_type_is_an_error() {
        assert!(serde_json::from_str::<NodeType>(r#""HOLOGRAM""#).is_err());
    }

    #[test]
    fn test_accessor_defaults() {
        let node = leaf("1:1", "Frame", NodeType::Frame);
        assert!(node.visible());
        assert_eq!(node.opacity(), 1.0);
        assert_eq!(node.padding_left(), 0.0);
        assert!(node.children().is_empty());
        assert!(node.fills().is_empty());
        assert_eq!(node.rectangle_corner_radii(), None);
    }

    #[test]
    fn test_corner_radii_fall_back_to_uniform_radius() {
        let mut node = leaf("1:1", "Card", NodeType::Rectangle);
        node.corner_radius = Some(4.0);
        assert_eq!(node.rectangle_corner_radii(), Some([4.0, 4.0, 4.0, 4.0]));

        node.rectangle_corner_radii = Some([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(node.rectangle_corner_radii(), Some([1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_enabled_children_skip_hidden_nodes() {
        let mut hidden = leaf("1:2", "Hidden", NodeType::Frame);
        hidden.visible = Some(false);
        let root = branch(
            "1:1",
            "Root",
            NodeType::Frame,
            vec![leaf("1:3", "Shown", NodeType::Frame), hidden],
        );
        let names: Vec<&str> = root.enabled_children().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["Shown"]);
    }

    #[test]
    fn test_depth_first_traversal_order_and_stacks() {
        let document = branch(
            "0:0",
            "Document",
            NodeType::Document,
            vec![branch(
                "0:1",
                "Page",
                NodeType::Canvas,
                vec![
                    branch(
                        "1:1",
                        "Frame",
                        NodeType::Frame,
                        vec![leaf("1:2", "Child", NodeType::Text)],
                    ),
                    leaf("1:3", "Sibling", NodeType::Rectangle),
                ],
            )],
        );

        let visits: Vec<(String, Vec<String>)> = document
            .depth_first_stack_iter()
            .map(|(node, stack)| {
                (
                    node.name.clone(),
                    stack.iter().map(|n| n.name.clone()).collect(),
                )
            })
            .collect();

        assert_eq!(
            visits,
            [
                (
                    "Page".to_string(),
                    vec!["Document".to_string(), "Page".to_string()]
                ),
                (
                    "Frame".to_string(),
                    vec![
                        "Document".to_string(),
                        "Page".to_string(),
                        "Frame".to_string()
                    ]
                ),
                (
                    "Child".to_string(),
                    vec![
                        "Document".to_string(),
                        "Page".to_string(),
                        "Frame".to_string(),
                        "Child".to_string()
                    ]
                ),
                (
                    "Sibling".to_string(),
                    vec![
                        "Document".to_string(),
                        "Page".to_string(),
                        "Sibling".to_string()
                    ]
                ),
            ]
        );
    }

    #[test]
    fn test_styles_map_preserves_slot_keys() {
        let node: Node = serde_json::from_value(serde_json::json!({
            "id": "1:1",
            "name": "Label",
            "type": "TEXT",
            "styles": {"fill": "1:10", "text": "1:11"},
        }))
        .expect("valid node JSON");

        let styles = node.styles.as_ref().expect("styles present");
        assert_eq!(styles.get(&StyleKey::Fill).map(String::as_str), Some("1:10"));
        assert_eq!(styles.get(&StyleKey::Text).map(String::as_str), Some("1:11"));

        let value = serde_json::to_value(&node).expect("serializable");
        assert_eq!(value["styles"]["fill"], "1:10");
    }
}
