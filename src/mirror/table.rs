//! 每页人工指定的主镜像地址（第 1 页到第 604 页，按页码顺序）。

pub(crate) static CURATED_PRIMARY: [&str; 604] = [
    "https://i.ibb.co/5XpKN8pM/001.png",
    "https://i.ibb.co/ks0cmb3d/002.png",
    "https://i.ibb.co/LqJ9Y9L/003.png",
    "https://i.ibb.co/kV3nRpSL/004.png",
    "https://i.ibb.co/LdbNggW9/005.png",
    "https://i.ibb.co/b5NkwP53/006.png",
    "https://i.ibb.co/1fVtpQWW/007.png",
    "https://i.ibb.co/x8rqY2Q0/008.png",
    "https://i.ibb.co/HLrD2QJV/009.png",
    "https://i.ibb.co/Gvx6NyKK/010.png",
    "https://i.ibb.co/LXbMfRP7/011.png",
    "https://i.ibb.co/Jw226R4B/012.png",
    "https://i.ibb.co/mVYHG1BB/013.png",
    "https://i.ibb.co/YFPYbsrD/014.png",
    "https://i.ibb.co/0y3tLsjZ/015.png",
    "https://i.ibb.co/dwWsGbsp/016.png",
    "https://i.ibb.co/6zKkQBY/017.png",
    "https://i.ibb.co/8ngh6qPW/018.png",
    "https://i.ibb.co/B5VYTfGG/019.png",
    "https://i.ibb.co/ymMXscdc/020.png",
    "https://i.ibb.co/8LL9vhCz/021.png",
    "https://i.ibb.co/WvNm0Wfy/022.png",
    "https://i.ibb.co/qLMnKZsP/023.png",
    "https://i.ibb.co/PGLtq6Fh/024.png",
    "https://i.ibb.co/R4jXrpV0/025.png",
    "https://i.ibb.co/M5RnS5MQ/026.png",
    "https://i.ibb.co/NdZ74NkB/027.png",
    "https://i.ibb.co/Y7C6LZRR/028.png",
    "https://i.ibb.co/4wTQRCPB/029.png",
    "https://i.ibb.co/YBrkJjC8/030.png",
    "https://i.ibb.co/3y5WN85T/031.png",
    "https://i.ibb.co/RGyH15Zx/032.png",
    "https://i.ibb.co/r2DFRkbm/033.png",
    "https://i.ibb.co/B2NS6wmS/034.png",
    "https://i.ibb.co/DHNsq0p7/035.png",
    "https://i.ibb.co/zWwxn5j7/036.png",
    "https://i.ibb.co/23pN9dkS/037.png",
    "https://i.ibb.co/j9rJvrpz/038.png",
    "https://i.ibb.co/Cszzgkzj/039.png",
    "https://i.ibb.co/jv893XPy/040.png",
    "https://i.ibb.co/3mBgKJB9/041.png",
    "https://i.ibb.co/Y4QYJqQ9/042.png",
    "https://i.ibb.co/4n77XsFt/043.png",
    "https://i.ibb.co/0j2XtTNb/044.png",
    "https://i.ibb.co/7wpXpmb/045.png",
    "https://i.ibb.co/p66dG3ZT/046.png",
    "https://i.ibb.co/xqzZW6R4/047.png",
    "https://i.ibb.co/Pv29Wnd0/048.png",
    "https://i.ibb.co/9kzDcXb5/049.png",
    "https://i.ibb.co/qYScF1qX/050.png",
    "https://i.ibb.co/ycB3gDk8/051.png",
    "https://i.ibb.co/TDkv84Gj/052.png",
    "https://i.ibb.co/9kSLWP6N/053.png",
    "https://i.ibb.co/LdDtxGBM/054.png",
    "https://i.ibb.co/ksCJHNm0/055.png",
    "https://i.ibb.co/Tq1bP8LG/056.png",
    "https://i.ibb.co/pv6PNY3Z/057.png",
    "https://i.ibb.co/kTKV9H5/058.png",
    "https://i.ibb.co/zHLCpJ1C/059.png",
    "https://i.ibb.co/gMHzfzGj/060.png",
    "https://i.ibb.co/HTHyjTy8/061.png",
    "https://i.ibb.co/N2wPLPM6/062.png",
    "https://i.ibb.co/q3NhMqtP/063.png",
    "https://i.ibb.co/d0RX5Qf2/064.png",
    "https://i.ibb.co/q3BRcCJH/065.png",
    "https://i.ibb.co/DgVR1xZW/066.png",
    "https://i.ibb.co/TMV4yhKY/067.png",
    "https://i.ibb.co/tTDLshnf/068.png",
    "https://i.ibb.co/Xk3RkfMg/069.png",
    "https://i.ibb.co/ksgvzgyH/070.png",
    "https://i.ibb.co/Yzf8t4z/071.png",
    "https://i.ibb.co/ZRvbMBth/072.png",
    "https://i.ibb.co/5XNcT72f/073.png",
    "https://i.ibb.co/C32kk5St/074.png",
    "https://i.ibb.co/MynSStmx/075.png",
    "https://i.ibb.co/cKh1KZ34/076.png",
    "https://i.ibb.co/vC0DMzsr/077.png",
    "https://i.ibb.co/G3v39v3R/078.png",
    "https://i.ibb.co/1JZ7HLXk/079.png",
    "https://i.ibb.co/xKBMdsw0/080.png",
    "https://i.ibb.co/PLhGY2M/081.png",
    "https://i.ibb.co/s9xQmtdC/082.png",
    "https://i.ibb.co/svp2MPtb/083.png",
    "https://i.ibb.co/nMNKFFrf/084.png",
    "https://i.ibb.co/zHR62C7K/085.png",
    "https://i.ibb.co/HLmZBrLP/086.png",
    "https://i.ibb.co/hT62zR4/087.png",
    "https://i.ibb.co/CsNvf8Ng/088.png",
    "https://i.ibb.co/5grdDMFR/089.png",
    "https://i.ibb.co/RGffWsNb/090.png",
    "https://i.ibb.co/j9z4y5HW/091.png",
    "https://i.ibb.co/d0bh4zj9/092.png",
    "https://i.ibb.co/4w6DMksr/093.png",
    "https://i.ibb.co/Ng1TRBbZ/094.png",
    "https://i.ibb.co/4ngP4rhN/095.png",
    "https://i.ibb.co/QvHPJ6JJ/096.png",
    "https://i.ibb.co/93GHNVbY/097.png",
    "https://i.ibb.co/MkBVBgtF/098.png",
    "https://i.ibb.co/1csD0SP/099.png",
    "https://i.ibb.co/HfnjbbCj/100.png",
    "https://i.ibb.co/yngMYwdY/101.png",
    "https://i.ibb.co/GLLCzHK/102.png",
    "https://i.ibb.co/XkrzKZdT/103.png",
    "https://i.ibb.co/LDMdTsq7/104.png",
    "https://i.ibb.co/hR9RVJJ5/105.png",
    "https://i.ibb.co/vxxJBvYq/106.png",
    "https://i.ibb.co/20P614GW/107.png",
    "https://i.ibb.co/DgDtB7kb/108.png",
    "https://i.ibb.co/wFTGs1j9/109.png",
    "https://i.ibb.co/B2XDZjXt/110.png",
    "https://i.ibb.co/DfzZyJjC/111.png",
    "https://i.ibb.co/jvqT3bTf/112.png",
    "https://i.ibb.co/4wz8DdHs/113.png",
    "https://i.ibb.co/fVKXx5ym/114.png",
    "https://i.ibb.co/h191NMDp/115.png",
    "https://i.ibb.co/ds6FT02f/116.png",
    "https://i.ibb.co/WNstkMTf/117.png",
    "https://i.ibb.co/fV6GGggD/118.png",
    "https://i.ibb.co/5XyhLcK0/119.png",
    "https://i.ibb.co/kg1kgsN7/120.png",
    "https://i.ibb.co/QFhbKMwY/121.png",
    "https://i.ibb.co/KjmMyCYk/122.png",
    "https://i.ibb.co/6RQyKKKk/123.png",
    "https://i.ibb.co/LDxg8Kwy/124.png",
    "https://i.ibb.co/4gFJVRY0/125.png",
    "https://i.ibb.co/33QYr06/126.png",
    "https://i.ibb.co/B5JLXppB/127.png",
    "https://i.ibb.co/k2csd5w5/128.png",
    "https://i.ibb.co/nsVXkvfc/129.png",
    "https://i.ibb.co/QFJXSfzx/130.png",
    "https://i.ibb.co/BHyKntp5/131.png",
    "https://i.ibb.co/n85BCMR0/132.png",
    "https://i.ibb.co/2Ym5nmRh/133.png",
    "https://i.ibb.co/GfP1j2KD/134.png",
    "https://i.ibb.co/6RkZ9gTM/135.png",
    "https://i.ibb.co/C31xRpGB/136.png",
    "https://i.ibb.co/yBqsPtrZ/137.png",
    "https://i.ibb.co/TMD5qXvs/138.png",
    "https://i.ibb.co/vCJKVbnN/139.png",
    "https://i.ibb.co/hJPSJ3y1/140.png",
    "https://i.ibb.co/TBTh35FZ/141.png",
    "https://i.ibb.co/1fHwxCCS/142.png",
    "https://i.ibb.co/RTVdzc6K/143.png",
    "https://i.ibb.co/R8rs0Wh/144.png",
    "https://i.ibb.co/HLXY7Y4D/145.png",
    "https://i.ibb.co/pjdZ320f/146.png",
    "https://i.ibb.co/d0tkZBr3/147.png",
    "https://i.ibb.co/67Fdf7WC/148.png",
    "https://i.ibb.co/1fH4vT4v/149.png",
    "https://i.ibb.co/QF9nhgrQ/150.png",
    "https://i.ibb.co/Cpx9tGQh/151.png",
    "https://i.ibb.co/WWqkjS03/152.png",
    "https://i.ibb.co/23z4d50K/153.png",
    "https://i.ibb.co/2108Q3N6/154.png",
    "https://i.ibb.co/xq8vwm08/155.png",
    "https://i.ibb.co/pYWn4F3/156.png",
    "https://i.ibb.co/JRqhvp1p/157.png",
    "https://i.ibb.co/Y4RCLrt0/158.png",
    "https://i.ibb.co/chcqYb79/159.png",
    "https://i.ibb.co/5hRBgr2h/160.png",
    "https://i.ibb.co/4nnn69dW/161.png",
    "https://i.ibb.co/3ySW87NN/162.png",
    "https://i.ibb.co/23RsDm5W/163.png",
    "https://i.ibb.co/cc1DbY9S/164.png",
    "https://i.ibb.co/7tvd2Lyy/165.png",
    "https://i.ibb.co/27507fHh/166.png",
    "https://i.ibb.co/DBvzHSL/167.png",
    "https://i.ibb.co/S73p160m/168.png",
    "https://i.ibb.co/tTR5K3Jz/169.png",
    "https://i.ibb.co/99RKZ3X3/170.png",
    "https://i.ibb.co/twzC261z/171.png",
    "https://i.ibb.co/jkzsCzFh/172.png",
    "https://i.ibb.co/6J44R1wT/173.png",
    "https://i.ibb.co/C3PNVkDQ/174.png",
    "https://i.ibb.co/zhfPgSDd/175.png",
    "https://i.ibb.co/jPz7kHnS/176.png",
    "https://i.ibb.co/S4xZb38X/177.png",
    "https://i.ibb.co/sJkgXMpc/178.png",
    "https://i.ibb.co/7db0Zw12/179.png",
    "https://i.ibb.co/fdHgZ4yj/180.png",
    "https://i.ibb.co/gFHBPVx1/181.png",
    "https://i.ibb.co/1tszj6S3/182.png",
    "https://i.ibb.co/1GyNZmw7/183.png",
    "https://i.ibb.co/nNGRXx7v/184.png",
    "https://i.ibb.co/FLvb9wty/185.png",
    "https://i.ibb.co/wNwMJt9R/186.png",
    "https://i.ibb.co/r2ThkYz0/187.png",
    "https://i.ibb.co/zVvzNYk5/188.png",
    "https://i.ibb.co/DdZFBpF/189.png",
    "https://i.ibb.co/d4sYrv3N/190.png",
    "https://i.ibb.co/HLZ5by8q/191.png",
    "https://i.ibb.co/JFkkrh6D/192.png",
    "https://i.ibb.co/h1D8HnjX/193.png",
    "https://i.ibb.co/fGxFsk4W/194.png",
    "https://i.ibb.co/nxf0b4s/195.png",
    "https://i.ibb.co/8Djjc1Vf/196.png",
    "https://i.ibb.co/VYdVw2B3/197.png",
    "https://i.ibb.co/tn7QDhW/198.png",
    "https://i.ibb.co/pB89zxJ4/199.png",
    "https://i.ibb.co/Y79pHpjN/200.png",
    "https://i.ibb.co/Fb8b8rrb/201.png",
    "https://i.ibb.co/MXnz3Qv/202.png",
    "https://i.ibb.co/3Y0nJ58f/203.png",
    "https://i.ibb.co/4wkB7FMc/204.png",
    "https://i.ibb.co/3J2dCmW/205.png",
    "https://i.ibb.co/k6sqrnps/206.png",
    "https://i.ibb.co/Zp1VJ68K/207.png",
    "https://i.ibb.co/SXPLQwdk/208.png",
    "https://i.ibb.co/7xr0XBkr/209.png",
    "https://i.ibb.co/KcRQMDXK/210.png",
    "https://i.ibb.co/qLk1sLf6/211.png",
    "https://i.ibb.co/8gdVHDMJ/212.png",
    "https://i.ibb.co/gLqcHmgv/213.png",
    "https://i.ibb.co/S77FB84h/214.png",
    "https://i.ibb.co/Q7ygHxhQ/215.png",
    "https://i.ibb.co/3mzmft9F/216.png",
    "https://i.ibb.co/21gSVg0x/217.png",
    "https://i.ibb.co/cqVgF3y/218.png",
    "https://i.ibb.co/4n9Snp9b/219.png",
    "https://i.ibb.co/v6gFKxDR/220.png",
    "https://i.ibb.co/1tb8t10h/221.png",
    "https://i.ibb.co/LdSnNbmh/222.png",
    "https://i.ibb.co/s9Z4SMLr/223.png",
    "https://i.ibb.co/NgVM2mYB/224.png",
    "https://i.ibb.co/rGLXsv1m/225.png",
    "https://i.ibb.co/DfHrJDJN/226.png",
    "https://i.ibb.co/d4Whbc95/227.png",
    "https://i.ibb.co/svvKL97r/228.png",
    "https://i.ibb.co/fYMMBZrw/229.png",
    "https://i.ibb.co/FL0KBJ73/230.png",
    "https://i.ibb.co/84fg1f1X/231.png",
    "https://i.ibb.co/35NcZYHS/232.png",
    "https://i.ibb.co/zT4QRsBY/233.png",
    "https://i.ibb.co/VY5WQK7q/234.png",
    "https://i.ibb.co/60ch0pY0/235.png",
    "https://i.ibb.co/v41JJW12/236.png",
    "https://i.ibb.co/MxdCPHWJ/237.png",
    "https://i.ibb.co/67PSC67C/238.png",
    "https://i.ibb.co/jPfm4QvH/239.png",
    "https://i.ibb.co/CKTRTQyS/240.png",
    "https://i.ibb.co/WvQKNvcN/241.png",
    "https://i.ibb.co/PvKf04FM/242.png",
    "https://i.ibb.co/TDtPhGGZ/243.png",
    "https://i.ibb.co/Mx0QXMpT/244.png",
    "https://i.ibb.co/0jyt7nGS/245.png",
    "https://i.ibb.co/zhCBtz3Y/246.png",
    "https://i.ibb.co/Wv1vnL8B/247.png",
    "https://i.ibb.co/6Rp9ZMKt/248.png",
    "https://i.ibb.co/Gf4PkKbp/249.png",
    "https://i.ibb.co/CKgQ2NJT/250.png",
    "https://i.ibb.co/J9pxVDn/251.png",
    "https://i.ibb.co/spKj8Hvg/252.png",
    "https://i.ibb.co/rf7RWB9r/253.png",
    "https://i.ibb.co/rK9qg0PR/254.png",
    "https://i.ibb.co/TDGZQQH3/255.png",
    "https://i.ibb.co/svV1HLBt/256.png",
    "https://i.ibb.co/v4RQDY0H/257.png",
    "https://i.ibb.co/CKLdN9Wq/258.png",
    "https://i.ibb.co/mrxQdyZt/259.png",
    "https://i.ibb.co/d0yJ0mGC/260.png",
    "https://i.ibb.co/5W3P60px/261.png",
    "https://i.ibb.co/67Xr188L/262.png",
    "https://i.ibb.co/QvDwqgCs/263.png",
    "https://i.ibb.co/NgJZk914/264.png",
    "https://i.ibb.co/gbcLhhkR/265.png",
    "https://i.ibb.co/7tnFhXBq/266.png",
    "https://i.ibb.co/0pjWN2sv/267.png",
    "https://i.ibb.co/35HXcktt/268.png",
    "https://i.ibb.co/v6fW2s1w/269.png",
    "https://i.ibb.co/Fk2WhBqL/270.png",
    "https://i.ibb.co/cScrMRgK/271.png",
    "https://i.ibb.co/4RNYJhm6/272.png",
    "https://i.ibb.co/0R346GbG/273.png",
    "https://i.ibb.co/Vkc6zWq/274.png",
    "https://i.ibb.co/27hXKhZk/275.png",
    "https://i.ibb.co/zWybgF1p/276.png",
    "https://i.ibb.co/pjxRWhGq/277.png",
    "https://i.ibb.co/4R65Xm8P/278.png",
    "https://i.ibb.co/FrwWBMQ/279.png",
    "https://i.ibb.co/hRxB1tVh/280.png",
    "https://i.ibb.co/jkY2Q0zV/281.png",
    "https://i.ibb.co/WNtVBLCv/282.png",
    "https://i.ibb.co/bkzpMRR/283.png",
    "https://i.ibb.co/XxBPn09M/284.png",
    "https://i.ibb.co/JRZPmm2F/285.png",
    "https://i.ibb.co/mrpvPpGZ/286.png",
    "https://i.ibb.co/vx64JmT0/287.png",
    "https://i.ibb.co/8g9L3q2m/288.png",
    "https://i.ibb.co/vCf5kFyj/289.png",
    "https://i.ibb.co/xK2XFRRv/290.png",
    "https://i.ibb.co/cKBxxqg1/291.png",
    "https://i.ibb.co/B2128JJB/292.png",
    "https://i.ibb.co/B2BJBc1z/293.png",
    "https://i.ibb.co/4g5kwGh3/294.png",
    "https://i.ibb.co/xt8vP36p/295.png",
    "https://i.ibb.co/fzNQr8wW/296.png",
    "https://i.ibb.co/pBD6yZXR/297.png",
    "https://i.ibb.co/9mGkBsQs/298.png",
    "https://i.ibb.co/k66FgHq5/299.png",
    "https://i.ibb.co/4wBY71PB/300.png",
    "https://i.ibb.co/MwZSBKJ/301.png",
    "https://i.ibb.co/39wPnykW/302.png",
    "https://i.ibb.co/fzxC9vYC/303.png",
    "https://i.ibb.co/4w0TH55q/304.png",
    "https://i.ibb.co/q39pDPfr/305.png",
    "https://i.ibb.co/Xf0vsrg4/306.png",
    "https://i.ibb.co/XfTbYd4L/307.png",
    "https://i.ibb.co/VprPDyxf/308.png",
    "https://i.ibb.co/ZRj3B6YK/309.png",
    "https://i.ibb.co/7xr5rSJH/310.png",
    "https://i.ibb.co/nq9DHVrL/311.png",
    "https://i.ibb.co/PzF5pWXx/312.png",
    "https://i.ibb.co/SDDcyxV6/313.png",
    "https://i.ibb.co/zV576ZgC/314.png",
    "https://i.ibb.co/39B7dp0k/315.png",
    "https://i.ibb.co/hxVhZB0d/316.png",
    "https://i.ibb.co/tTVFpT2B/317.png",
    "https://i.ibb.co/Fk1rzMGk/318.png",
    "https://i.ibb.co/3J6f0qK/319.png",
    "https://i.ibb.co/MDph4zT8/320.png",
    "https://i.ibb.co/pBTd0W2h/321.png",
    "https://i.ibb.co/KjMGz7Dg/322.png",
    "https://i.ibb.co/d4TWPFwR/323.png",
    "https://i.ibb.co/hRVMXdfc/324.png",
    "https://i.ibb.co/4Zk2P6Zc/325.png",
    "https://i.ibb.co/0yyzrdd1/326.png",
    "https://i.ibb.co/rRS1MRLw/327.png",
    "https://i.ibb.co/20z2FSwR/328.png",
    "https://i.ibb.co/Lzc7h4YG/329.png",
    "https://i.ibb.co/d4Rw7HTc/330.png",
    "https://i.ibb.co/Fkyy5mPN/331.png",
    "https://i.ibb.co/n8QMHCxj/332.png",
    "https://i.ibb.co/HfTyc8P0/333.png",
    "https://i.ibb.co/dFmh6jg/334.png",
    "https://i.ibb.co/MySzHDKF/335.png",
    "https://i.ibb.co/Swp5VPdP/336.png",
    "https://i.ibb.co/5h7Y1W0J/337.png",
    "https://i.ibb.co/M5pMKR7Y/338.png",
    "https://i.ibb.co/2Yv0PX1v/339.png",
    "https://i.ibb.co/4ZJyyGV5/340.png",
    "https://i.ibb.co/vxVSM6kG/341.png",
    "https://i.ibb.co/0ykYCPvR/342.png",
    "https://i.ibb.co/hNMSybQ/343.png",
    "https://i.ibb.co/sdg7b6p7/344.png",
    "https://i.ibb.co/vxsrsH9H/345.png",
    "https://i.ibb.co/SXYT6GBD/346.png",
    "https://i.ibb.co/v6LNqTky/347.png",
    "https://i.ibb.co/hjdmyKy/348.png",
    "https://i.ibb.co/fGLWRFRw/349.png",
    "https://i.ibb.co/YTL1fhCH/350.png",
    "https://i.ibb.co/WWZSqgj9/351.png",
    "https://i.ibb.co/JWhNdP5F/352.png",
    "https://i.ibb.co/35TKgN4f/353.png",
    "https://i.ibb.co/dRVzHbR/354.png",
    "https://i.ibb.co/R4S1J9rK/355.png",
    "https://i.ibb.co/HDwpZbTp/356.png",
    "https://i.ibb.co/KcdCzmsY/357.png",
    "https://i.ibb.co/fYyBvXND/358.png",
    "https://i.ibb.co/C3V7M48z/359.png",
    "https://i.ibb.co/Zz1fVFkm/360.png",
    "https://i.ibb.co/gL7vWS1s/361.png",
    "https://i.ibb.co/DJz67sD/362.png",
    "https://i.ibb.co/bjw19BdK/363.png",
    "https://i.ibb.co/bMLrvwM9/364.png",
    "https://i.ibb.co/PsTggsJh/365.png",
    "https://i.ibb.co/kVs4hsPr/366.png",
    "https://i.ibb.co/tPWddYGz/367.png",
    "https://i.ibb.co/9kdbgQ7P/368.png",
    "https://i.ibb.co/ZRqzbsKy/369.png",
    "https://i.ibb.co/xKt4BQJC/370.png",
    "https://i.ibb.co/Wv95ymL3/371.png",
    "https://i.ibb.co/F4vPsZ7Z/372.png",
    "https://i.ibb.co/H3LmjvW/373.png",
    "https://i.ibb.co/pjc7JTnv/374.png",
    "https://i.ibb.co/QvDy5Smy/375.png",
    "https://i.ibb.co/TBmBqRRh/376.png",
    "https://i.ibb.co/ccydtyhW/377.png",
    "https://i.ibb.co/8T4HhsM/378.png",
    "https://i.ibb.co/nNB2T3zK/379.png",
    "https://i.ibb.co/84YbHkbd/380.png",
    "https://i.ibb.co/rYQ67gN/381.png",
    "https://i.ibb.co/NgVw18NH/382.png",
    "https://i.ibb.co/W41NR367/383.png",
    "https://i.ibb.co/gQd2j97/384.png",
    "https://i.ibb.co/wFXMZWB7/385.png",
    "https://i.ibb.co/8gL2hK0H/386.png",
    "https://i.ibb.co/cj8Qwkq/387.png",
    "https://i.ibb.co/3yQ6htgz/388.png",
    "https://i.ibb.co/M5V6JhcF/389.png",
    "https://i.ibb.co/PZXR2nbv/390.png",
    "https://i.ibb.co/spp0V9rp/391.png",
    "https://i.ibb.co/Y7dJvXPQ/392.png",
    "https://i.ibb.co/Fb0MVZ7p/393.png",
    "https://i.ibb.co/zYJwjPz/394.png",
    "https://i.ibb.co/Lh9N3Rwy/395.png",
    "https://i.ibb.co/Lh20NpM8/396.png",
    "https://i.ibb.co/GQpWyk4S/397.png",
    "https://i.ibb.co/Q3FTm0pr/398.png",
    "https://i.ibb.co/My0yG7Gq/399.png",
    "https://i.ibb.co/8DNRwKJM/400.png",
    "https://i.ibb.co/TqnHgyZ5/401.png",
    "https://i.ibb.co/93WSpwTn/402.png",
    "https://i.ibb.co/VWn9rSB2/403.png",
    "https://i.ibb.co/200BTcsc/404.png",
    "https://i.ibb.co/Cpbn1PjG/405.png",
    "https://i.ibb.co/gh16zBg/406.png",
    "https://i.ibb.co/k26zjsyV/407.png",
    "https://i.ibb.co/hbddJsf/408.png",
    "https://i.ibb.co/mCdC7Fmg/409.png",
    "https://i.ibb.co/Ldk1Bfbr/410.png",
    "https://i.ibb.co/wm4jbwY/411.png",
    "https://i.ibb.co/3mmpnD8S/412.png",
    "https://i.ibb.co/5x21GNjh/413.png",
    "https://i.ibb.co/chSpPZzM/414.png",
    "https://i.ibb.co/nqXf6Nrq/415.png",
    "https://i.ibb.co/NnxJCrdJ/416.png",
    "https://i.ibb.co/v707ymY/417.png",
    "https://i.ibb.co/MDwFHJz0/418.png",
    "https://i.ibb.co/mKxpbQS/419.png",
    "https://i.ibb.co/nNxTtBk2/420.png",
    "https://i.ibb.co/GvQP0wz8/421.png",
    "https://i.ibb.co/p6pyzPxx/422.png",
    "https://i.ibb.co/B2QtKk30/423.png",
    "https://i.ibb.co/mVd1ZDTN/424.png",
    "https://i.ibb.co/gFzC4T9K/425.png",
    "https://i.ibb.co/FcbC7FY/426.png",
    "https://i.ibb.co/xKz4wSmQ/427.png",
    "https://i.ibb.co/s9BfGXTx/428.png",
    "https://i.ibb.co/Kp9PYXd3/429.png",
    "https://i.ibb.co/jZLZx2Df/430.png",
    "https://i.ibb.co/bj7CX6yL/431.png",
    "https://i.ibb.co/m5YD8bfT/432.png",
    "https://i.ibb.co/m5NnLDDt/433.png",
    "https://i.ibb.co/LXdVBrGZ/434.png",
    "https://i.ibb.co/jv370RkM/435.png",
    "https://i.ibb.co/tMJbTcHH/436.png",
    "https://i.ibb.co/xqBLRgFY/437.png",
    "https://i.ibb.co/6J8LyKHf/438.png",
    "https://i.ibb.co/270Kh6nn/439.png",
    "https://i.ibb.co/Pzzt3ZQN/440.png",
    "https://i.ibb.co/WpGgwqbk/441.png",
    "https://i.ibb.co/zhd1g695/442.png",
    "https://i.ibb.co/BHPhBzmc/443.png",
    "https://i.ibb.co/KxB9hzYq/444.png",
    "https://i.ibb.co/Q3wdnGzh/445.png",
    "https://i.ibb.co/vxNxyY2F/446.png",
    "https://i.ibb.co/vbCtnWm/447.png",
    "https://i.ibb.co/QFXFsF8x/448.png",
    "https://i.ibb.co/pH66xhb/449.png",
    "https://i.ibb.co/5XQWB5Jm/450.png",
    "https://i.ibb.co/qM9HFT7N/451.png",
    "https://i.ibb.co/Jj4JSLh6/452.png",
    "https://i.ibb.co/gF3GXWD4/453.png",
    "https://i.ibb.co/d4N4Wg4G/454.png",
    "https://i.ibb.co/Q7XFJF0C/455.png",
    "https://i.ibb.co/7Jv3kZ79/456.png",
    "https://i.ibb.co/Y4x8Nj69/457.png",
    "https://i.ibb.co/Vpk8XT33/458.png",
    "https://i.ibb.co/HfWD2CYb/459.png",
    "https://i.ibb.co/fBqZMtf/460.png",
    "https://i.ibb.co/9HK92Zxq/461.png",
    "https://i.ibb.co/zVBDbsbs/462.png",
    "https://i.ibb.co/gLSwBGVT/463.png",
    "https://i.ibb.co/vNdc7M6/464.png",
    "https://i.ibb.co/8nYMKjwn/465.png",
    "https://i.ibb.co/bMgJTnBy/466.png",
    "https://i.ibb.co/gZ1PYQGZ/467.png",
    "https://i.ibb.co/v6Rt0tbD/468.png",
    "https://i.ibb.co/DggWbcKm/469.png",
    "https://i.ibb.co/LXjykVpf/470.png",
    "https://i.ibb.co/tTSBJkY1/471.png",
    "https://i.ibb.co/8LZYWGbr/472.png",
    "https://i.ibb.co/hRhR4nD2/473.png",
    "https://i.ibb.co/BKz9Z3Dh/474.png",
    "https://i.ibb.co/3YMStvhF/475.png",
    "https://i.ibb.co/zTK8FCBT/476.png",
    "https://i.ibb.co/yFrjGJGV/477.png",
    "https://i.ibb.co/zj0M2cS/478.png",
    "https://i.ibb.co/DDPQLmW9/479.png",
    "https://i.ibb.co/7tZm9ph5/480.png",
    "https://i.ibb.co/LdSj5pcn/481.png",
    "https://i.ibb.co/4wnxwkHf/482.png",
    "https://i.ibb.co/203pQPFh/483.png",
    "https://i.ibb.co/9msQqX2P/484.png",
    "https://i.ibb.co/ynqvbWQL/485.png",
    "https://i.ibb.co/9kMjXpvF/486.png",
    "https://i.ibb.co/PZXhHhrM/487.png",
    "https://i.ibb.co/PsQL7jR4/488.png",
    "https://i.ibb.co/MypY1KmF/489.png",
    "https://i.ibb.co/TxMpQk4d/490.png",
    "https://i.ibb.co/DTyC5Ms/491.png",
    "https://i.ibb.co/YBJHMJ1v/492.png",
    "https://i.ibb.co/vx6S3nZG/493.png",
    "https://i.ibb.co/Kcs52JHy/494.png",
    "https://i.ibb.co/RkK4f7Zy/495.png",
    "https://i.ibb.co/3mdzRnpH/496.png",
    "https://i.ibb.co/6JgfQTpL/497.png",
    "https://i.ibb.co/gMsS1wh5/498.png",
    "https://i.ibb.co/G15dT7W/499.png",
    "https://i.ibb.co/1tRG0cKw/500.png",
    "https://i.ibb.co/DfM22wcS/501.png",
    "https://i.ibb.co/99gFDmtc/502.png",
    "https://i.ibb.co/NntH1hyY/503.png",
    "https://i.ibb.co/gZz8QdkF/504.png",
    "https://i.ibb.co/TM16wbzT/505.png",
    "https://i.ibb.co/KpVZ6PVn/506.png",
    "https://i.ibb.co/QvdSm3rj/507.png",
    "https://i.ibb.co/8L0bwHKN/508.png",
    "https://i.ibb.co/yBsmr1xc/509.png",
    "https://i.ibb.co/DSwpVKh/510.png",
    "https://i.ibb.co/v6Vh3syd/511.png",
    "https://i.ibb.co/8Lk7J3S7/512.png",
    "https://i.ibb.co/YBd7FN2B/513.png",
    "https://i.ibb.co/CszHskBh/514.png",
    "https://i.ibb.co/27d8qDp9/515.png",
    "https://i.ibb.co/mVCzR8W7/516.png",
    "https://i.ibb.co/39J7VgTt/517.png",
    "https://i.ibb.co/R4Gfz5bt/518.png",
    "https://i.ibb.co/Jw5WCngY/519.png",
    "https://i.ibb.co/yckxYSxX/520.png",
    "https://i.ibb.co/tpzXf0S4/521.png",
    "https://i.ibb.co/hJd6YgMq/522.png",
    "https://i.ibb.co/tpJ1WsT0/523.png",
    "https://i.ibb.co/x82FCqDR/524.png",
    "https://i.ibb.co/Kjxmwhh0/525.png",
    "https://i.ibb.co/6cwDRfgv/526.png",
    "https://i.ibb.co/PZwWv2RX/527.png",
    "https://i.ibb.co/pjSV39PD/528.png",
    "https://i.ibb.co/YCKFRjY/529.png",
    "https://i.ibb.co/39VQN8xH/530.png",
    "https://i.ibb.co/YTq8Y8Lc/531.png",
    "https://i.ibb.co/xq0McQ3S/532.png",
    "https://i.ibb.co/WNqPmDsZ/533.png",
    "https://i.ibb.co/rK2CZ7VT/534.png",
    "https://i.ibb.co/kVQPJNGt/535.png",
    "https://i.ibb.co/gbkqkc4C/536.png",
    "https://i.ibb.co/RdTQxzs/537.png",
    "https://i.ibb.co/p6bLcHQy/538.png",
    "https://i.ibb.co/5WsYqxgR/539.png",
    "https://i.ibb.co/PvH6d89d/540.png",
    "https://i.ibb.co/gZ7sQ4Yk/541.png",
    "https://i.ibb.co/1YjqXKmx/542.png",
    "https://i.ibb.co/Q7S8BLH3/543.png",
    "https://i.ibb.co/BVqvfnnN/544.png",
    "https://i.ibb.co/DJjtj9f/545.png",
    "https://i.ibb.co/tTRp06Zt/546.png",
    "https://i.ibb.co/V0zydMRz/547.png",
    "https://i.ibb.co/wNrQZ4Jk/548.png",
    "https://i.ibb.co/SDRwQPV9/549.png",
    "https://i.ibb.co/twhzvCTS/550.png",
    "https://i.ibb.co/h1MjBYYx/551.png",
    "https://i.ibb.co/3YPyd8MG/552.png",
    "https://i.ibb.co/6JLNz7Sw/553.png",
    "https://i.ibb.co/Kx7S3WNB/554.png",
    "https://i.ibb.co/ZR9Y3dqq/555.png",
    "https://i.ibb.co/yngrj44R/556.png",
    "https://i.ibb.co/F4qcGJRT/557.png",
    "https://i.ibb.co/TBhXPNH9/558.png",
    "https://i.ibb.co/MxhqsJTj/559.png",
    "https://i.ibb.co/PvbQ8kst/560.png",
    "https://i.ibb.co/qY0xNbbX/561.png",
    "https://i.ibb.co/xKFBzMw3/562.png",
    "https://i.ibb.co/G4s7NDH8/563.png",
    "https://i.ibb.co/Kx1gyJHz/564.png",
    "https://i.ibb.co/spMGrKrr/565.png",
    "https://i.ibb.co/rKBMcMNr/566.png",
    "https://i.ibb.co/DDv7V5gH/567.png",
    "https://i.ibb.co/xS6Vhc3V/568.png",
    "https://i.ibb.co/YFp2qPKR/569.png",
    "https://i.ibb.co/bgZWSgbc/570.png",
    "https://i.ibb.co/LD3Qkz9x/571.png",
    "https://i.ibb.co/x01q8Gm/572.png",
    "https://i.ibb.co/5WKX6bv7/573.png",
    "https://i.ibb.co/m53GFW1p/574.png",
    "https://i.ibb.co/d0FL3YTp/575.png",
    "https://i.ibb.co/21DPmMy8/576.png",
    "https://i.ibb.co/wZkwTg7N/577.png",
    "https://i.ibb.co/0NbpHHM/578.png",
    "https://i.ibb.co/Zzhv0Wz3/579.png",
    "https://i.ibb.co/0yNpLsfG/580.png",
    "https://i.ibb.co/cSRWpsG8/581.png",
    "https://i.ibb.co/7dhwrWxp/582.png",
    "https://i.ibb.co/21jmg8Nq/583.png",
    "https://i.ibb.co/JWdcZcdS/584.png",
    "https://i.ibb.co/FkVH9MT9/585.png",
    "https://i.ibb.co/0yN7DkTK/586.png",
    "https://i.ibb.co/Txhc2PL3/587.png",
    "https://i.ibb.co/PZWTnmFv/588.png",
    "https://i.ibb.co/FbL4tfQ3/589.png",
    "https://i.ibb.co/6JyWgqXW/590.png",
    "https://i.ibb.co/Xx4nk4KX/591.png",
    "https://i.ibb.co/cKZ1sB6R/592.png",
    "https://i.ibb.co/hFWBzBvf/593.png",
    "https://i.ibb.co/N6dRnTTL/594.png",
    "https://i.ibb.co/JwQhqLXb/595.png",
    "https://i.ibb.co/20721vnN/596.png",
    "https://i.ibb.co/6cv2VZ8z/597.png",
    "https://i.ibb.co/Kc1tq3Ry/598.png",
    "https://i.ibb.co/wZzMD0fb/599.png",
    "https://i.ibb.co/r2W9mN29/600.png",
    "https://i.ibb.co/VYL43CM7/601.png",
    "https://i.ibb.co/bMwpJ8qS/602.png",
    "https://i.ibb.co/m5t5Hmk4/603.png",
    "https://i.ibb.co/btx9HHC/604.png",
];
