use x11rb::atom_manager;

atom_manager! {
    /// A collection of Atoms.
    pub AtomCollection:

    /// A handle to a response from the X11 server.
    AtomCollectionCookie {
        NetActiveWindow: b"_NET_ACTIVE_WINDOW" as &[u8],
        NetWMName: b"_NET_WM_NAME",

        NetWMState: b"_NET_WM_STATE",
        NetWMStateModal: b"_NET_WM_STATE_MODAL",
        NetWMStateMaximizedVert: b"_NET_WM_STATE_MAXIMIZED_VERT",
        NetWMStateMaximizedHorz: b"_NET_WM_STATE_MAXIMIZED_HORZ",
        NetWMStateHidden: b"_NET_WM_STATE_HIDDEN",

        NetClientList: b"_NET_CLIENT_LIST",
        NetCurrentDesktop: b"_NET_CURRENT_DESKTOP",
        NetWMDesktop: b"_NET_WM_DESKTOP",
        NetWorkarea: b"_NET_WORKAREA",
        NetFrameExtents: b"_NET_FRAME_EXTENTS",
        NetMoveResizeWindow: b"_NET_MOVERESIZE_WINDOW",

        GtkFrameExtents: b"_GTK_FRAME_EXTENTS",
        MotifWMHints: b"_MOTIF_WM_HINTS",
        XtileRemote: b"_XTILE_REMOTE",
    }
}

impl AtomCollection {
    /// Client window properties whose change is worth an event.
    pub fn client_watched(&self) -> [u32; 5] {
        [
            self.NetWMState,
            self.NetWMDesktop,
            self.NetWMName,
            self.MotifWMHints,
            x11rb::protocol::xproto::AtomEnum::WM_NAME.into(),
        ]
    }
}
